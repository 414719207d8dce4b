use serde::{Deserialize, Serialize};
use validator::Validate;

/// Course format classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    Text,
    Interactive,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Catalog entry with accessibility and format metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Course {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub title: String,
    pub platform: String,
    pub url: String,
    pub description: String,
    #[serde(default)]
    pub instructor: Option<String>,
    /// Total duration in minutes
    #[validate(range(min = 1))]
    pub duration: u32,
    /// Average module length in minutes
    #[serde(rename = "moduleLength")]
    #[validate(range(min = 1))]
    pub module_length: u32,
    #[serde(rename = "contentType")]
    pub content_type: ContentType,
    #[serde(rename = "skillLevel")]
    pub skill_level: SkillLevel,
    #[serde(rename = "hasCaption", default)]
    pub has_caption: bool,
    #[serde(rename = "hasTranscript", default)]
    pub has_transcript: bool,
    #[serde(rename = "hasDyslexiaFont", default)]
    pub has_dyslexia_font: bool,
    #[serde(rename = "hasStructuredLayout", default)]
    pub has_structured_layout: bool,
    #[serde(rename = "hasProgressTracking", default)]
    pub has_progress_tracking: bool,
    #[serde(rename = "isGamified", default)]
    pub is_gamified: bool,
    #[serde(rename = "isSelfPaced", default)]
    pub is_self_paced: bool,
    /// Display string such as "Free" or "$49"
    pub price: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<u8>,
    #[serde(rename = "enrollmentCount", default)]
    pub enrollment_count: Option<u32>,
}

impl Course {
    /// Read one of the seven boolean accessibility/format flags
    #[inline]
    pub fn has(&self, flag: CourseFlag) -> bool {
        match flag {
            CourseFlag::HasCaption => self.has_caption,
            CourseFlag::HasTranscript => self.has_transcript,
            CourseFlag::HasDyslexiaFont => self.has_dyslexia_font,
            CourseFlag::HasStructuredLayout => self.has_structured_layout,
            CourseFlag::HasProgressTracking => self.has_progress_tracking,
            CourseFlag::IsGamified => self.is_gamified,
            CourseFlag::IsSelfPaced => self.is_self_paced,
        }
    }

    /// Lowercased text the topic search runs against
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.description,
            self.category,
            self.tags.join(" ")
        )
        .to_lowercase()
    }

    /// Whether the price string advertises the course as free
    pub fn is_free(&self) -> bool {
        self.price.to_lowercase().contains("free")
    }
}

/// The seven boolean accessibility/format flags a course carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseFlag {
    #[serde(rename = "hasCaption")]
    HasCaption,
    #[serde(rename = "hasTranscript")]
    HasTranscript,
    #[serde(rename = "hasDyslexiaFont")]
    HasDyslexiaFont,
    #[serde(rename = "hasStructuredLayout")]
    HasStructuredLayout,
    #[serde(rename = "hasProgressTracking")]
    HasProgressTracking,
    #[serde(rename = "isGamified")]
    IsGamified,
    #[serde(rename = "isSelfPaced")]
    IsSelfPaced,
}

impl CourseFlag {
    /// All flags, in accessibility display order
    pub const ALL: [CourseFlag; 7] = [
        CourseFlag::HasCaption,
        CourseFlag::HasTranscript,
        CourseFlag::HasDyslexiaFont,
        CourseFlag::HasStructuredLayout,
        CourseFlag::HasProgressTracking,
        CourseFlag::IsGamified,
        CourseFlag::IsSelfPaced,
    ];
}

/// Self-identified learning profile category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Neurotype {
    #[serde(rename = "ADHD")]
    Adhd,
    Dyslexia,
    Autism,
    #[serde(rename = "Auditory Processing Disorder")]
    AuditoryProcessingDisorder,
    Multiple,
    Other,
}

impl Neurotype {
    pub const ALL: [Neurotype; 6] = [
        Neurotype::Adhd,
        Neurotype::Dyslexia,
        Neurotype::Autism,
        Neurotype::AuditoryProcessingDisorder,
        Neurotype::Multiple,
        Neurotype::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Neurotype::Adhd => "ADHD",
            Neurotype::Dyslexia => "Dyslexia",
            Neurotype::Autism => "Autism",
            Neurotype::AuditoryProcessingDisorder => "Auditory Processing Disorder",
            Neurotype::Multiple => "Multiple",
            Neurotype::Other => "Other",
        }
    }

    /// Exact-match parse of the display name
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.as_str() == value)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Neurotype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive module length band in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleLengthBand {
    pub min: u32,
    pub max: u32,
}

impl ModuleLengthBand {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, minutes: u32) -> bool {
        minutes >= self.min && minutes <= self.max
    }

    #[inline]
    pub fn is_below(&self, minutes: u32) -> bool {
        minutes < self.min
    }
}

/// Scoring preferences for one neurotype
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeurotypeProfile {
    pub neurotype: Neurotype,
    #[serde(rename = "preferredModuleLength")]
    pub preferred_module_length: ModuleLengthBand,
    #[serde(rename = "preferredContentTypes")]
    pub preferred_content_types: Vec<ContentType>,
    /// Flags that earn extra score when set on a course
    #[serde(rename = "bonusFeatures")]
    pub bonus_features: Vec<CourseFlag>,
    pub description: String,
}

impl NeurotypeProfile {
    #[inline]
    pub fn prefers_content_type(&self, content_type: ContentType) -> bool {
        self.preferred_content_types.contains(&content_type)
    }
}
