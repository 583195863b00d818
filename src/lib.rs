//! Roommate Match - compatibility scoring for roommate surveys
//!
//! This library scores how well two users' lifestyle surveys fit together
//! (0-100) and ranks a pool of candidates by that score. The HTTP service
//! in `main.rs` serves it on top of an Appwrite document store.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, RankResult, score, calculate_match_score, looking_for};
pub use crate::models::{SurveyResponse, UserSurvey, MatchResult, RankedMatch, ScoringWeights, RescaleCurve};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let survey = SurveyResponse {
            noise_tolerance: Some("Quiet (No noise)".to_string()),
            ..Default::default()
        };
        assert_eq!(score(&survey, &survey), 100);
    }
}
