use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::SurveyResponse;

/// Request to rank roommate candidates
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to score two ad-hoc survey responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorePairRequest {
    #[serde(default)]
    pub a: SurveyResponse,
    #[serde(default)]
    pub b: SurveyResponse,
}
