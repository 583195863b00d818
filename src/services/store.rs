use async_trait::async_trait;
use thiserror::Error;
use crate::models::UserSurvey;

/// Errors that can occur when reading surveys from a document store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key or token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Read access to stored survey documents
#[async_trait]
pub trait SurveyStore: Send + Sync {
    /// Fetch the survey of one user, `None` when the user never submitted one
    async fn get_survey(&self, user_id: &str) -> Result<Option<UserSurvey>, StoreError>;

    /// Ids of every user with a stored survey, in store order
    async fn list_survey_user_ids(&self) -> Result<Vec<String>, StoreError>;
}
