use serde::{Deserialize, Serialize};
use crate::models::{MatchResult, SkillLevel};

/// Price class derived from a course's display price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    Free,
    Paid,
}

/// Post-match narrowing of a result list
///
/// Never changes scores or relative order. Empty selections are no-ops.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultFilter {
    pub min_match: u8,
    pub price_types: Vec<PriceType>,
    pub skill_levels: Vec<SkillLevel>,
    pub platforms: Vec<String>,
}

impl ResultFilter {
    pub fn is_empty(&self) -> bool {
        self.min_match == 0
            && self.price_types.is_empty()
            && self.skill_levels.is_empty()
            && self.platforms.is_empty()
    }

    /// Check if a result passes every active filter
    #[inline]
    pub fn matches(&self, result: &MatchResult) -> bool {
        let course = &result.course;

        if result.match_score < self.min_match {
            return false;
        }

        // Selecting both price types is treated as no restriction, not as an empty result
        if !self.price_types.is_empty() {
            let price_type = if course.is_free() { PriceType::Free } else { PriceType::Paid };
            if !self.price_types.contains(&price_type) {
                return false;
            }
        }

        if !self.skill_levels.is_empty() && !self.skill_levels.contains(&course.skill_level) {
            return false;
        }

        if !self.platforms.is_empty() && !self.platforms.contains(&course.platform) {
            return false;
        }

        true
    }

    pub fn apply(&self, results: Vec<MatchResult>) -> Vec<MatchResult> {
        if self.is_empty() {
            return results;
        }
        results.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Sorted, de-duplicated platform names present in a result set
pub fn available_platforms(results: &[MatchResult]) -> Vec<String> {
    let mut platforms: Vec<String> = results.iter().map(|r| r.course.platform.clone()).collect();
    platforms.sort();
    platforms.dedup();
    platforms
}
