// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Course, ContentType, SkillLevel, CourseFlag, Neurotype, ModuleLengthBand, NeurotypeProfile};
pub use requests::{UserPreference, LearningPreference, AccessibilityNeed, MatchQuery, MatchRequest, PreferenceError};
pub use responses::{MatchResult, HealthResponse, ErrorResponse};
