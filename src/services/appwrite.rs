use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use crate::models::{SurveyResponse, UserSurvey};
use crate::services::store::{StoreError, SurveyStore};

/// Documents requested per page when listing surveys
const DEFAULT_PAGE_SIZE: usize = 100;

/// Appwrite API client
///
/// Reads survey documents from an Appwrite database collection:
/// - Fetching one user's survey
/// - Listing every user that submitted a survey
pub struct AppwriteClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    surveys_collection: String,
    page_size: usize,
    client: Client,
}

impl AppwriteClient {
    /// Create a new Appwrite client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        surveys_collection: String,
        timeout_secs: u64,
    ) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            project_id,
            database_id,
            surveys_collection,
            page_size: DEFAULT_PAGE_SIZE,
            client,
        })
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.database_id),
            urlencoding::encode(&self.surveys_collection)
        )
    }

    /// List documents of the surveys collection matching `queries`
    async fn list_documents(&self, queries: &[String]) -> Result<Vec<Value>, StoreError> {
        let query_string = queries
            .iter()
            .map(|q| format!("{}={}", urlencoding::encode("queries[]"), urlencoding::encode(q)))
            .collect::<Vec<_>>()
            .join("&");
        let url = format!("{}?{}", self.documents_url(), query_string);

        tracing::debug!("Listing survey documents: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(StoreError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Appwrite returned {}: {}", status, body);
            return Err(StoreError::ApiError(format!("Failed to list surveys: {}", status)));
        }

        let json: Value = response.json().await?;

        json.get("documents")
            .and_then(|d| d.as_array())
            .cloned()
            .ok_or_else(|| StoreError::InvalidResponse("Missing documents array".into()))
    }
}

#[async_trait]
impl SurveyStore for AppwriteClient {
    async fn get_survey(&self, user_id: &str) -> Result<Option<UserSurvey>, StoreError> {
        // The id must stay a single JSON string literal inside the query
        let quoted_id = serde_json::to_string(user_id)?;
        let queries = [
            format!("equal(\"userId\", [{}])", quoted_id),
            "limit(1)".to_string(),
        ];

        let documents = self.list_documents(&queries).await?;

        match documents.first() {
            Some(doc) => parse_survey(doc).map(Some),
            None => {
                tracing::debug!("No survey stored for user {}", user_id);
                Ok(None)
            }
        }
    }

    async fn list_survey_user_ids(&self) -> Result<Vec<String>, StoreError> {
        let mut user_ids = Vec::new();
        let mut offset = 0;

        loop {
            let queries = [
                "select([\"userId\"])".to_string(),
                format!("limit({})", self.page_size),
                format!("offset({})", offset),
            ];

            let documents = self.list_documents(&queries).await?;
            let page_len = documents.len();

            user_ids.extend(documents.iter().filter_map(|doc| {
                let data = doc.get("data").unwrap_or(doc);
                data.get("userId").and_then(Value::as_str).map(str::to_string)
            }));

            if page_len < self.page_size {
                break;
            }
            offset += page_len;
        }

        tracing::debug!("Listed {} survey owners", user_ids.len());
        Ok(user_ids)
    }
}

/// Convert an Appwrite document into a survey
///
/// Fields may sit at the top level or under `data`. `responses` may be an
/// object or a JSON-encoded string.
fn parse_survey(doc: &Value) -> Result<UserSurvey, StoreError> {
    let data = doc.get("data").unwrap_or(doc);

    let user_id = data
        .get("userId")
        .and_then(Value::as_str)
        .ok_or_else(|| StoreError::InvalidResponse("Survey document has no userId".into()))?
        .to_string();

    let responses: SurveyResponse = match data.get("responses") {
        None | Some(Value::Null) => SurveyResponse::default(),
        Some(Value::String(encoded)) => serde_json::from_str(encoded)
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse responses: {}", e)))?,
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse responses: {}", e)))?,
    };

    let submitted_at = ["submittedAt", "updatedAt", "$updatedAt"]
        .iter()
        .find_map(|key| data.get(*key).and_then(Value::as_str))
        .and_then(|ts| chrono::DateTime::parse_from_rfc3339(ts).ok())
        .map(|ts| ts.with_timezone(&chrono::Utc));

    Ok(UserSurvey {
        user_id,
        responses,
        submitted_at,
    })
}
