use crate::core::{
    profiles::ProfileTable,
    scoring::{accessibility_highlights, calculate_match_score},
};
use crate::models::{MatchResult, UserPreference};
use crate::services::CourseCatalog;
use std::sync::Arc;

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Resolve the learner's neurotype profile
/// 2. Topic filter via the catalog search
/// 3. Score, explain and highlight each relevant course
/// 4. Stable sort by score, descending
#[derive(Debug, Clone)]
pub struct Matcher {
    profiles: Arc<ProfileTable>,
}

impl Matcher {
    pub fn new(profiles: ProfileTable) -> Self {
        Self {
            profiles: Arc::new(profiles),
        }
    }

    pub fn with_standard_profiles() -> Self {
        Self::new(ProfileTable::standard())
    }

    pub fn profiles(&self) -> &ProfileTable {
        &self.profiles
    }

    /// Rank catalog courses for a validated learner preference
    ///
    /// Every topic-relevant course is returned; ties keep search order.
    pub fn get_matched_courses<C>(&self, catalog: &C, preference: &UserPreference) -> Vec<MatchResult>
    where
        C: CourseCatalog + ?Sized,
    {
        let profile = self.profiles.get(preference.neurotype);
        let relevant = catalog.search(&preference.topics);
        let candidate_count = relevant.len();

        let mut results: Vec<MatchResult> = relevant
            .into_iter()
            .map(|course| {
                let scored = calculate_match_score(course, preference, profile);
                MatchResult {
                    course: course.clone(),
                    match_score: scored.score,
                    match_reasons: scored.reasons,
                    accessibility_highlights: accessibility_highlights(course),
                }
            })
            .collect();

        // sort_by is stable, so equal scores keep search order
        results.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        tracing::debug!(
            "Matched {} of {} courses for {} profile",
            candidate_count,
            catalog.all().len(),
            preference.neurotype
        );

        results
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_standard_profiles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentType, Course, LearningPreference, Neurotype, SkillLevel};
    use crate::services::InMemoryCatalog;

    fn create_course(id: &str, module_length: u32, content_type: ContentType, is_gamified: bool) -> Course {
        Course {
            id: id.to_string(),
            title: format!("Python Course {}", id),
            platform: "Udemy".to_string(),
            url: format!("https://example.com/{}", id),
            description: "Learn Python".to_string(),
            instructor: Some("Ada".to_string()),
            duration: 600,
            module_length,
            content_type,
            skill_level: SkillLevel::Beginner,
            has_caption: true,
            has_transcript: false,
            has_dyslexia_font: false,
            has_structured_layout: false,
            has_progress_tracking: false,
            is_gamified,
            is_self_paced: false,
            price: "$19".to_string(),
            category: "Programming".to_string(),
            tags: vec!["python".to_string()],
            rating: None,
            enrollment_count: None,
        }
    }

    fn create_preference(topics: Vec<&str>) -> UserPreference {
        UserPreference {
            neurotype: Neurotype::Adhd,
            learning_preferences: vec![LearningPreference::Gamified],
            topics: topics.into_iter().map(String::from).collect(),
            accessibility_needs: vec![],
        }
    }

    #[test]
    fn test_matches_sorted_by_score() {
        let catalog = InMemoryCatalog::new(vec![
            create_course("low", 45, ContentType::Text, false),
            create_course("high", 10, ContentType::Interactive, true),
            create_course("mid", 10, ContentType::Text, false),
        ])
        .unwrap();

        let results = Matcher::default().get_matched_courses(&catalog, &create_preference(vec!["python"]));

        let ids: Vec<&str> = results.iter().map(|r| r.course.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
        assert_eq!(results[0].accessibility_highlights, vec!["Captions", "Gamified"]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = InMemoryCatalog::new(vec![
            create_course("b", 10, ContentType::Video, false),
            create_course("a", 10, ContentType::Video, false),
            create_course("c", 10, ContentType::Video, false),
        ])
        .unwrap();

        let results = Matcher::default().get_matched_courses(&catalog, &create_preference(vec!["python"]));

        let ids: Vec<&str> = results.iter().map(|r| r.course.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_irrelevant_topics_yield_nothing() {
        let catalog = InMemoryCatalog::new(vec![create_course("1", 10, ContentType::Video, false)]).unwrap();

        let results = Matcher::default().get_matched_courses(&catalog, &create_preference(vec!["pottery"]));
        assert!(results.is_empty());
    }
}
