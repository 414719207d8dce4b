// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod profiles;
pub mod scoring;

pub use filters::{available_platforms, PriceType, ResultFilter};
pub use matcher::Matcher;
pub use profiles::ProfileTable;
pub use scoring::{accessibility_highlights, calculate_match_score, MatchScore};
