//! Neuromatch - course matching for neurodivergent learners
//!
//! This library ranks catalog courses against a learner's self-reported
//! neurotype and learning preferences. Each course gets a 0-100 fit score,
//! up to three human-readable reasons, and its accessibility highlights.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, ProfileTable, ResultFilter, calculate_match_score, accessibility_highlights};
pub use models::{Course, Neurotype, NeurotypeProfile, UserPreference, MatchResult, MatchQuery, MatchRequest, PreferenceError};
pub use services::{CourseCatalog, InMemoryCatalog, CatalogError};
