use serde::{Deserialize, Serialize};
use crate::models::domain::Course;

/// A scored course with its explanations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub course: Course,
    /// Fit score in 0..=100
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    /// At most three, most impactful first
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
    #[serde(rename = "accessibilityHighlights")]
    pub accessibility_highlights: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub courses: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
