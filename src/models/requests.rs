use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use serde_json::Value;

use crate::core::filters::{PriceType, ResultFilter};
use crate::models::domain::{Neurotype, SkillLevel};

/// Errors raised while turning caller input into a `UserPreference`
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: &'static str, message: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl PreferenceError {
    /// Stable machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            PreferenceError::MissingParameter(_) => "missing_parameter",
            PreferenceError::InvalidValue { .. } => "invalid_parameter",
            PreferenceError::Validation(_) => "validation_failed",
        }
    }
}

/// Learner-selectable learning preference tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearningPreference {
    #[serde(rename = "Short lessons (under 15 min)")]
    ShortLessons,
    #[serde(rename = "Medium lessons (15-30 min)")]
    MediumLessons,
    #[serde(rename = "Long lessons (30+ min)")]
    LongLessons,
    #[serde(rename = "Visual focus (diagrams, videos)")]
    VisualFocus,
    #[serde(rename = "Text-based content")]
    TextBased,
    #[serde(rename = "Interactive exercises")]
    InteractiveExercises,
    #[serde(rename = "Predictable structure")]
    PredictableStructure,
    #[serde(rename = "Self-paced learning")]
    SelfPaced,
    #[serde(rename = "Gamified experience")]
    Gamified,
    #[serde(rename = "Clear objectives")]
    ClearObjectives,
    #[serde(rename = "Minimal distractions")]
    MinimalDistractions,
    #[serde(rename = "Community support")]
    CommunitySupport,
    #[serde(rename = "Downloadable materials")]
    DownloadableMaterials,
    #[serde(rename = "Mobile-friendly")]
    MobileFriendly,
}

/// Learner-selectable accessibility accommodations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessibilityNeed {
    #[serde(rename = "Captions required")]
    Captions,
    #[serde(rename = "Transcripts required")]
    Transcripts,
    #[serde(rename = "Dyslexia-friendly fonts")]
    DyslexiaFonts,
    #[serde(rename = "High contrast visuals")]
    HighContrast,
    #[serde(rename = "Screen reader compatible")]
    ScreenReader,
    #[serde(rename = "Keyboard navigation")]
    KeyboardNavigation,
}

/// A learner's stated profile, supplied fresh on every request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserPreference {
    pub neurotype: Neurotype,
    #[validate(length(min = 1, message = "Select at least one learning preference"))]
    #[serde(rename = "learningPreferences")]
    pub learning_preferences: Vec<LearningPreference>,
    #[validate(length(min = 1, message = "Enter at least one topic of interest"))]
    pub topics: Vec<String>,
    #[serde(rename = "accessibilityNeeds", default)]
    pub accessibility_needs: Vec<AccessibilityNeed>,
}

/// Raw query string for `GET /api/matches`
///
/// List-valued parameters are JSON-encoded arrays, e.g.
/// `topics=["python","data"]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchQuery {
    pub neurotype: Option<String>,
    pub preferences: Option<String>,
    pub topics: Option<String>,
    pub accessibility: Option<String>,
    #[serde(rename = "minMatch")]
    pub min_match: Option<u8>,
    #[serde(rename = "priceTypes")]
    pub price_types: Option<String>,
    #[serde(rename = "skillLevels")]
    pub skill_levels: Option<String>,
    pub platforms: Option<String>,
}

impl MatchQuery {
    /// Build and validate the learner preference carried by this query
    pub fn to_preference(&self) -> Result<UserPreference, PreferenceError> {
        let neurotype_raw = required(&self.neurotype, "neurotype")?;
        let preferences_raw = required(&self.preferences, "preferences")?;
        let topics_raw = required(&self.topics, "topics")?;

        let neurotype = Neurotype::parse(neurotype_raw).ok_or_else(|| PreferenceError::InvalidValue {
            field: "neurotype",
            message: format!("unrecognized neurotype '{}'", neurotype_raw),
        })?;

        let preference = UserPreference {
            neurotype,
            learning_preferences: parse_json_list(preferences_raw, "preferences")?,
            topics: parse_json_list(topics_raw, "topics")?,
            accessibility_needs: optional_json_list(&self.accessibility, "accessibility")?,
        };

        preference.validate()?;
        Ok(preference)
    }

    /// Build the optional result filter carried by this query
    pub fn to_filter(&self) -> Result<ResultFilter, PreferenceError> {
        Ok(ResultFilter {
            min_match: self.min_match.unwrap_or(0),
            price_types: optional_json_list::<PriceType>(&self.price_types, "priceTypes")?,
            skill_levels: optional_json_list::<SkillLevel>(&self.skill_levels, "skillLevels")?,
            platforms: optional_json_list::<String>(&self.platforms, "platforms")?,
        })
    }
}

/// Raw JSON body for `POST /api/matches`
///
/// Every field is taken loosely so absent fields and unusable values are
/// reported separately, the same way as for the query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchRequest {
    pub neurotype: Option<Value>,
    #[serde(rename = "learningPreferences")]
    pub learning_preferences: Option<Value>,
    pub topics: Option<Value>,
    #[serde(rename = "accessibilityNeeds")]
    pub accessibility_needs: Option<Value>,
}

impl MatchRequest {
    /// Build and validate the learner preference carried by this body
    pub fn to_preference(&self) -> Result<UserPreference, PreferenceError> {
        let neurotype = match &self.neurotype {
            None => return Err(PreferenceError::MissingParameter("neurotype")),
            Some(Value::String(raw)) if raw.trim().is_empty() => {
                return Err(PreferenceError::MissingParameter("neurotype"))
            }
            Some(Value::String(raw)) => {
                Neurotype::parse(raw.trim()).ok_or_else(|| PreferenceError::InvalidValue {
                    field: "neurotype",
                    message: format!("unrecognized neurotype '{}'", raw),
                })?
            }
            Some(other) => {
                return Err(PreferenceError::InvalidValue {
                    field: "neurotype",
                    message: format!("expected a string, got {}", other),
                })
            }
        };

        let learning_preferences = match &self.learning_preferences {
            Some(value) => from_json_value(value, "learningPreferences")?,
            None => return Err(PreferenceError::MissingParameter("learningPreferences")),
        };
        let topics = match &self.topics {
            Some(value) => from_json_value(value, "topics")?,
            None => return Err(PreferenceError::MissingParameter("topics")),
        };
        let accessibility_needs = match &self.accessibility_needs {
            Some(value) => from_json_value(value, "accessibilityNeeds")?,
            None => Vec::new(),
        };

        let preference = UserPreference {
            neurotype,
            learning_preferences,
            topics,
            accessibility_needs,
        };

        preference.validate()?;
        Ok(preference)
    }
}

/// Blank values count as missing
fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, PreferenceError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(PreferenceError::MissingParameter(field)),
    }
}

fn parse_json_list<T: DeserializeOwned>(raw: &str, field: &'static str) -> Result<Vec<T>, PreferenceError> {
    serde_json::from_str(raw).map_err(|e| PreferenceError::InvalidValue {
        field,
        message: e.to_string(),
    })
}

fn from_json_value<T: DeserializeOwned>(value: &Value, field: &'static str) -> Result<Vec<T>, PreferenceError> {
    Vec::<T>::deserialize(value).map_err(|e| PreferenceError::InvalidValue {
        field,
        message: e.to_string(),
    })
}

fn optional_json_list<T: DeserializeOwned>(
    raw: &Option<String>,
    field: &'static str,
) -> Result<Vec<T>, PreferenceError> {
    match raw.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => parse_json_list(v, field),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> MatchQuery {
        MatchQuery {
            neurotype: Some("ADHD".to_string()),
            preferences: Some(r#"["Short lessons (under 15 min)","Gamified experience"]"#.to_string()),
            topics: Some(r#"["python"]"#.to_string()),
            accessibility: Some(r#"["Captions required"]"#.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_query_builds_preference() {
        let preference = query().to_preference().unwrap();

        assert_eq!(preference.neurotype, Neurotype::Adhd);
        assert_eq!(
            preference.learning_preferences,
            vec![LearningPreference::ShortLessons, LearningPreference::Gamified]
        );
        assert_eq!(preference.topics, vec!["python"]);
        assert_eq!(preference.accessibility_needs, vec![AccessibilityNeed::Captions]);
    }

    #[test]
    fn test_missing_parameter_is_distinguished() {
        let mut q = query();
        q.topics = None;
        let err = q.to_preference().unwrap_err();
        assert!(matches!(err, PreferenceError::MissingParameter("topics")));
        assert_eq!(err.code(), "missing_parameter");

        let mut q = query();
        q.neurotype = Some("   ".to_string());
        assert!(matches!(
            q.to_preference().unwrap_err(),
            PreferenceError::MissingParameter("neurotype")
        ));
    }

    #[test]
    fn test_unknown_neurotype_is_invalid_value() {
        let mut q = query();
        q.neurotype = Some("Dyscalculia".to_string());
        let err = q.to_preference().unwrap_err();
        assert!(matches!(err, PreferenceError::InvalidValue { field: "neurotype", .. }));
        assert_eq!(err.code(), "invalid_parameter");
    }

    #[test]
    fn test_unknown_accessibility_tag_is_invalid_value() {
        let mut q = query();
        q.accessibility = Some(r#"["Sign language"]"#.to_string());
        assert!(matches!(
            q.to_preference().unwrap_err(),
            PreferenceError::InvalidValue { field: "accessibility", .. }
        ));
    }

    #[test]
    fn test_malformed_json_is_invalid_value() {
        let mut q = query();
        q.topics = Some("python".to_string());
        assert!(matches!(
            q.to_preference().unwrap_err(),
            PreferenceError::InvalidValue { field: "topics", .. }
        ));
    }

    #[test]
    fn test_empty_lists_fail_validation() {
        let mut q = query();
        q.topics = Some("[]".to_string());
        let err = q.to_preference().unwrap_err();
        assert!(matches!(err, PreferenceError::Validation(_)));
        assert!(err.to_string().contains("topics"));

        let mut q = query();
        q.preferences = Some("[]".to_string());
        let err = q.to_preference().unwrap_err();
        assert!(err.to_string().contains("learning"));
    }

    #[test]
    fn test_accessibility_is_optional() {
        let mut q = query();
        q.accessibility = None;
        assert!(q.to_preference().unwrap().accessibility_needs.is_empty());
    }

    fn request(body: serde_json::Value) -> MatchRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_body_builds_preference() {
        let preference = request(serde_json::json!({
            "neurotype": "Auditory Processing Disorder",
            "learningPreferences": ["Text-based content"],
            "topics": ["writing"]
        }))
        .to_preference()
        .unwrap();

        assert_eq!(preference.neurotype, Neurotype::AuditoryProcessingDisorder);
        assert_eq!(preference.learning_preferences, vec![LearningPreference::TextBased]);
        assert!(preference.accessibility_needs.is_empty());
    }

    #[test]
    fn test_body_missing_field_is_distinguished() {
        let err = request(serde_json::json!({
            "neurotype": "ADHD",
            "learningPreferences": ["Gamified experience"]
        }))
        .to_preference()
        .unwrap_err();
        assert!(matches!(err, PreferenceError::MissingParameter("topics")));

        let err = request(serde_json::json!({
            "neurotype": null,
            "learningPreferences": ["Gamified experience"],
            "topics": ["python"]
        }))
        .to_preference()
        .unwrap_err();
        assert_eq!(err.code(), "missing_parameter");
    }

    #[test]
    fn test_body_bad_values_are_invalid() {
        let err = request(serde_json::json!({
            "neurotype": "Dyscalculia",
            "learningPreferences": ["Gamified experience"],
            "topics": ["python"]
        }))
        .to_preference()
        .unwrap_err();
        assert!(matches!(err, PreferenceError::InvalidValue { field: "neurotype", .. }));

        let err = request(serde_json::json!({
            "neurotype": "ADHD",
            "learningPreferences": ["Gamified experience"],
            "topics": "python"
        }))
        .to_preference()
        .unwrap_err();
        assert!(matches!(err, PreferenceError::InvalidValue { field: "topics", .. }));

        let err = request(serde_json::json!({
            "neurotype": 3,
            "learningPreferences": ["Gamified experience"],
            "topics": ["python"]
        }))
        .to_preference()
        .unwrap_err();
        assert_eq!(err.code(), "invalid_parameter");
    }

    #[test]
    fn test_body_empty_topics_fail_validation() {
        let err = request(serde_json::json!({
            "neurotype": "Other",
            "learningPreferences": ["Mobile-friendly"],
            "topics": []
        }))
        .to_preference()
        .unwrap_err();
        assert_eq!(err.code(), "validation_failed");
    }

    #[test]
    fn test_filter_parsing() {
        let mut q = query();
        q.min_match = Some(70);
        q.price_types = Some(r#"["free"]"#.to_string());
        q.skill_levels = Some(r#"["beginner","advanced"]"#.to_string());

        let filter = q.to_filter().unwrap();
        assert_eq!(filter.min_match, 70);
        assert_eq!(filter.price_types, vec![PriceType::Free]);
        assert_eq!(filter.skill_levels, vec![SkillLevel::Beginner, SkillLevel::Advanced]);
        assert!(filter.platforms.is_empty());

        q.skill_levels = Some(r#"["expert"]"#.to_string());
        assert!(matches!(
            q.to_filter().unwrap_err(),
            PreferenceError::InvalidValue { field: "skillLevels", .. }
        ));
    }
}
