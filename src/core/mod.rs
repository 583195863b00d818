// Core algorithm exports
pub mod gate;
pub mod labels;
pub mod matcher;
pub mod scoring;
pub mod tags;

pub use gate::gender_compatible;
pub use matcher::{Matcher, RankResult};
pub use scoring::{calculate_match_score, rescale};
pub use tags::looking_for;

use crate::models::{SurveyResponse, ScoringWeights, RescaleCurve};

/// Score two surveys with the default weights and curve
pub fn score(a: &SurveyResponse, b: &SurveyResponse) -> u8 {
    calculate_match_score(a, b, &ScoringWeights::default(), &RescaleCurve::default())
}
