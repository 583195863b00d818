use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{looking_for, Matcher};
use crate::models::{
    FindMatchesRequest, ScorePairRequest, FindMatchesResponse, PairScoreResponse, HealthResponse,
    ErrorResponse, MatchResult, UserSurvey,
};
use crate::services::{CacheManager, CacheKey, SurveyStore};

/// Survey fetches in flight at once while building a candidate pool
const FETCH_CONCURRENCY: usize = 16;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SurveyStore>,
    pub cache: Arc<CacheManager>,
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_pair))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/{user_id}/{candidate_id}", web::get().to(score_users));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score two survey responses sent in the request
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "a": { "cleanliness": "Very tidy (everything in place)" },
///   "b": { "cleanliness": "I don't care" }
/// }
/// ```
async fn score_pair(
    state: web::Data<AppState>,
    req: web::Json<ScorePairRequest>,
) -> impl Responder {
    let score = state.matcher.score(&req.a, &req.b);
    tracing::debug!("Scored ad-hoc pair: {}", score);
    HttpResponse::Ok().json(MatchResult { score })
}

/// Score a stored user against one candidate
///
/// GET /api/v1/matches/{userId}/{candidateId}
async fn score_users(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (user_id, candidate_id) = path.into_inner();

    let (current, candidate) = match tokio::join!(
        load_survey(state.store.as_ref(), &user_id),
        load_survey(state.store.as_ref(), &candidate_id),
    ) {
        (Ok(current), Ok(candidate)) => (current, candidate),
        (Err(response), _) | (_, Err(response)) => return response,
    };

    let score = state.matcher.score(&current.responses, &candidate.responses);

    HttpResponse::Ok().json(PairScoreResponse {
        user_id,
        candidate_id,
        score,
        looking_for: looking_for(&candidate.responses),
    })
}

/// Rank roommate candidates for a user
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "limit": 20
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Validation failed",
            errors.to_string(),
            400,
        ));
    }

    let user_id = &req.user_id;
    let limit = req
        .limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit) as usize;

    tracing::info!("Finding matches for user: {}, limit: {}", user_id, limit);

    let current = match load_survey(state.store.as_ref(), user_id).await {
        Ok(survey) => survey,
        Err(response) => return response,
    };

    let cache_key = CacheKey::matches(user_id, current.submitted_at, limit);
    if let Ok(cached) = state.cache.get::<FindMatchesResponse>(&cache_key).await {
        tracing::debug!("Serving cached matches for {}", user_id);
        return HttpResponse::Ok().json(cached);
    }

    let candidate_ids = match state.store.list_survey_user_ids().await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::error!("Failed to list surveys for {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Failed to list surveys",
                e.to_string(),
                500,
            ));
        }
    };

    let candidates = fetch_candidates(&state.store, candidate_ids, user_id).await;
    tracing::debug!("Fetched {} candidate surveys for {}", candidates.len(), user_id);

    let result = state.matcher.rank(&current, candidates, limit);

    let response = FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    };

    if let Err(e) = state.cache.set(&cache_key, &response).await {
        tracing::warn!("Failed to cache matches for {}: {}", user_id, e);
    }

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        response.matches.len(),
        user_id,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Fetch a survey or build the error response to return
async fn load_survey(store: &dyn SurveyStore, user_id: &str) -> Result<UserSurvey, HttpResponse> {
    match store.get_survey(user_id).await {
        Ok(Some(survey)) => Ok(survey),
        Ok(None) => Err(HttpResponse::NotFound().json(ErrorResponse::new(
            "Survey not found",
            format!("No survey submitted for user {}", user_id),
            404,
        ))),
        Err(e) => {
            tracing::error!("Failed to fetch survey for {}: {}", user_id, e);
            Err(HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Failed to fetch survey",
                e.to_string(),
                500,
            )))
        }
    }
}

/// Fetch candidate surveys concurrently, keeping listing order
///
/// Candidates that disappeared or failed to load are left out of the pool.
async fn fetch_candidates(
    store: &Arc<dyn SurveyStore>,
    candidate_ids: Vec<String>,
    exclude_user_id: &str,
) -> Vec<UserSurvey> {
    let permits = Arc::new(Semaphore::new(FETCH_CONCURRENCY));
    let mut tasks = JoinSet::new();

    for (index, candidate_id) in candidate_ids
        .into_iter()
        .filter(|id| id != exclude_user_id)
        .enumerate()
    {
        let store = Arc::clone(store);
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            let _permit = permits.acquire_owned().await;
            let result = store.get_survey(&candidate_id).await;
            (index, candidate_id, result)
        });
    }

    let mut fetched = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, _, Ok(Some(survey)))) => fetched.push((index, survey)),
            Ok((_, candidate_id, Ok(None))) => {
                tracing::debug!("Survey for {} vanished while ranking", candidate_id);
            }
            Ok((_, candidate_id, Err(e))) => {
                tracing::warn!("Skipping candidate {}: {}", candidate_id, e);
            }
            Err(e) => tracing::warn!("Candidate fetch task failed: {}", e),
        }
    }

    fetched.sort_by_key(|(index, _)| *index);
    fetched.into_iter().map(|(_, survey)| survey).collect()
}
