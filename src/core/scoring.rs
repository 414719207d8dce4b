use crate::models::{
    AccessibilityNeed, ContentType, Course, CourseFlag, LearningPreference, NeurotypeProfile,
    UserPreference,
};

const BASE_SCORE: i32 = 50;
const IN_BAND_POINTS: i32 = 20;
const SHORT_MODULE_POINTS: i32 = 10;
const CONTENT_TYPE_POINTS: i32 = 15;
const BONUS_FEATURE_POINTS: i32 = 5;
const BONUS_FEATURE_CAP: i32 = 25;
const LEARNING_PREFERENCE_POINTS: i32 = 5;
const QUALITY_POINTS: i32 = 5;
const MIN_QUALITY_RATING: u8 = 4;
const POPULAR_ENROLLMENT: u32 = 10_000;
const SHORT_LESSON_MAX_MINUTES: u32 = 15;
const MEDIUM_LESSON_MAX_MINUTES: u32 = 30;
const MAX_REASONS: usize = 3;

/// Highlight label per flag, in display order
const HIGHLIGHT_LABELS: [(CourseFlag, &str); 7] = [
    (CourseFlag::HasCaption, "Captions"),
    (CourseFlag::HasTranscript, "Transcripts"),
    (CourseFlag::HasDyslexiaFont, "Dyslexia-friendly fonts"),
    (CourseFlag::HasStructuredLayout, "Structured layout"),
    (CourseFlag::HasProgressTracking, "Progress tracking"),
    (CourseFlag::IsGamified, "Gamified"),
    (CourseFlag::IsSelfPaced, "Self-paced"),
];

const SHORT_LESSON_REASON: &str = "Short lesson format reduces overwhelm";
const POPULAR_REASON: &str = "Popular course with strong community";

/// Score and explanations for one course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchScore {
    pub score: u8,
    pub reasons: Vec<String>,
}

/// Calculate a match score (0-100) for a course against a learner's profile
///
/// Scoring formula:
/// score = 50                           # Base
///     + module_length (0 | 10 | 20)    # In band = 20, shorter = 10
///     + content_type (0 | 15)          # Preferred by the neurotype
///     + min(5 * bonus_features, 25)    # Profile bonus flags set on the course
///     + 5 * learning_preference_hits
///     + accessibility_need_hits        # 5 each, 3 for high contrast
///     + quality (0-10)                 # Rating >= 4, enrollment > 10k
///
/// The total is clamped to 0..=100 and only the first three reasons are kept.
pub fn calculate_match_score(
    course: &Course,
    preference: &UserPreference,
    profile: &NeurotypeProfile,
) -> MatchScore {
    let (raw, mut reasons) = evaluate(course, preference, profile);
    reasons.truncate(MAX_REASONS);

    MatchScore {
        score: raw.clamp(0, 100) as u8,
        reasons,
    }
}

/// Labels for every accessibility/format flag set on a course
pub fn accessibility_highlights(course: &Course) -> Vec<String> {
    HIGHLIGHT_LABELS
        .iter()
        .filter(|(flag, _)| course.has(*flag))
        .map(|(_, label)| label.to_string())
        .collect()
}

/// Unclamped score with every emitted reason, in emission order
fn evaluate(
    course: &Course,
    preference: &UserPreference,
    profile: &NeurotypeProfile,
) -> (i32, Vec<String>) {
    let mut score = BASE_SCORE;
    let mut reasons = Vec::new();

    // Module length fit
    let band = profile.preferred_module_length;
    let mut module_length_noted = true;
    if band.contains(course.module_length) {
        score += IN_BAND_POINTS;
        reasons.push(format!(
            "{}-minute modules match your preferred pace",
            course.module_length
        ));
    } else if band.is_below(course.module_length) {
        score += SHORT_MODULE_POINTS;
        reasons.push(format!(
            "Short {}-minute modules for quick learning",
            course.module_length
        ));
    } else {
        module_length_noted = false;
    }

    // Content type fit
    if profile.prefers_content_type(course.content_type) {
        score += CONTENT_TYPE_POINTS;
        reasons.push(content_type_reason(course.content_type).to_string());
    }

    // Bonus features: every hit is explained, but points are capped
    let mut bonus_points = 0;
    for flag in &profile.bonus_features {
        if course.has(*flag) {
            bonus_points += BONUS_FEATURE_POINTS;
            reasons.push(bonus_feature_reason(*flag).to_string());
        }
    }
    score += bonus_points.min(BONUS_FEATURE_CAP);

    // Learning preference alignment
    for pref in &preference.learning_preferences {
        if !learning_preference_satisfied(*pref, course) {
            continue;
        }
        score += LEARNING_PREFERENCE_POINTS;
        if *pref == LearningPreference::ShortLessons && !module_length_noted {
            reasons.push(SHORT_LESSON_REASON.to_string());
            module_length_noted = true;
        }
    }

    // Accessibility need alignment
    score += preference
        .accessibility_needs
        .iter()
        .map(|need| accessibility_need_points(*need, course))
        .sum::<i32>();

    // Quality signals
    if course.rating.is_some_and(|r| r >= MIN_QUALITY_RATING) {
        score += QUALITY_POINTS;
    }
    if course.enrollment_count.is_some_and(|n| n > POPULAR_ENROLLMENT) {
        score += QUALITY_POINTS;
        reasons.push(POPULAR_REASON.to_string());
    }

    (score, reasons)
}

fn content_type_reason(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Interactive => "Interactive content keeps you engaged",
        ContentType::Video => "Visual learning through video content",
        ContentType::Text => "Text-based for focused reading",
        ContentType::Mixed => "Mixed content types for variety",
    }
}

fn bonus_feature_reason(flag: CourseFlag) -> &'static str {
    match flag {
        CourseFlag::IsGamified => "Gamified experience makes learning fun",
        CourseFlag::HasProgressTracking => "Track your progress clearly",
        CourseFlag::IsSelfPaced => "Learn at your own pace",
        CourseFlag::HasCaption => "Full captions available",
        CourseFlag::HasTranscript => "Complete transcripts provided",
        CourseFlag::HasDyslexiaFont => "Dyslexia-friendly typography",
        CourseFlag::HasStructuredLayout => "Well-organized, predictable structure",
    }
}

/// Whether a course satisfies one learning preference rule
///
/// Preferences with no course-side signal never match.
#[inline]
fn learning_preference_satisfied(pref: LearningPreference, course: &Course) -> bool {
    let minutes = course.module_length;
    match pref {
        LearningPreference::ShortLessons => minutes <= SHORT_LESSON_MAX_MINUTES,
        LearningPreference::MediumLessons => {
            minutes > SHORT_LESSON_MAX_MINUTES && minutes <= MEDIUM_LESSON_MAX_MINUTES
        }
        LearningPreference::LongLessons => minutes > MEDIUM_LESSON_MAX_MINUTES,
        LearningPreference::VisualFocus => {
            matches!(course.content_type, ContentType::Video | ContentType::Interactive)
        }
        LearningPreference::TextBased => course.content_type == ContentType::Text,
        LearningPreference::InteractiveExercises => course.content_type == ContentType::Interactive,
        LearningPreference::Gamified => course.is_gamified,
        LearningPreference::SelfPaced => course.is_self_paced,
        LearningPreference::ClearObjectives | LearningPreference::PredictableStructure => {
            course.has_structured_layout
        }
        LearningPreference::MinimalDistractions
        | LearningPreference::CommunitySupport
        | LearningPreference::DownloadableMaterials
        | LearningPreference::MobileFriendly => false,
    }
}

/// Points a course earns for one accessibility need
///
/// High contrast has no dedicated flag; structured layout stands in for it.
#[inline]
fn accessibility_need_points(need: AccessibilityNeed, course: &Course) -> i32 {
    match need {
        AccessibilityNeed::Captions if course.has_caption => 5,
        AccessibilityNeed::Transcripts if course.has_transcript => 5,
        AccessibilityNeed::DyslexiaFonts if course.has_dyslexia_font => 5,
        AccessibilityNeed::HighContrast if course.has_structured_layout => 3,
        _ => 0,
    }
}
