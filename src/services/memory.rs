use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use crate::models::{SurveyResponse, UserSurvey};
use crate::services::store::{StoreError, SurveyStore};

/// Survey store held in process memory
///
/// Lists user ids in first-insert order. Used for tests and local demos.
#[derive(Default)]
pub struct InMemorySurveyStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    order: Vec<String>,
    surveys: HashMap<String, UserSurvey>,
}

impl InMemorySurveyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user's survey
    pub fn upsert(&self, user_id: &str, responses: SurveyResponse) {
        let mut inner = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        if !inner.surveys.contains_key(user_id) {
            inner.order.push(user_id.to_string());
        }

        let mut survey = UserSurvey::new(user_id, responses);
        survey.submitted_at = Some(chrono::Utc::now());
        inner.surveys.insert(user_id.to_string(), survey);
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|inner| inner.order.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<(String, SurveyResponse)> for InMemorySurveyStore {
    fn from_iter<I: IntoIterator<Item = (String, SurveyResponse)>>(iter: I) -> Self {
        let store = Self::new();
        for (user_id, responses) in iter {
            store.upsert(&user_id, responses);
        }
        store
    }
}

#[async_trait]
impl SurveyStore for InMemorySurveyStore {
    async fn get_survey(&self, user_id: &str) -> Result<Option<UserSurvey>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::ApiError(format!("Survey store lock poisoned: {}", e)))?;
        Ok(inner.surveys.get(user_id).cloned())
    }

    async fn list_survey_user_ids(&self) -> Result<Vec<String>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::ApiError(format!("Survey store lock poisoned: {}", e)))?;
        Ok(inner.order.clone())
    }
}
