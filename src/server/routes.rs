//! Axum route handlers for the profile server.
//!
//! # Routes
//!
//! - `GET  /health`: liveness probe
//! - `GET  /api/`: API banner
//! - `POST /api/profiles`: derive, store and return a profile
//! - `GET  /api/profiles/:session_id`: session history, newest first
//! - `GET  /api/profiles/profile/:profile_id`: one stored profile
//! - `GET  /api/sessions/:session_id/stats`: session counter and visit times
//! - `GET  /api/questionnaire/questions`: both questionnaires
//! - `POST /api/questionnaire/readings`: self-assessment answers to readings
//! - `POST /api/questionnaire/blockage`: blockage answers to recommendations

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::profile::{self, EnergyCenterReadings};
use crate::questionnaire::{self, BlockageAnswer, ASSESSMENT_QUESTIONS, BLOCKAGE_QUESTIONS};
use crate::storage::{MemoryStore, ProfileRecord, ProfileStore, HISTORY_LIMIT};
use crate::utilities::errors::StoreError;

/// Banner returned by `GET /api/`.
pub const API_MESSAGE: &str = "Law of One Profile Generator API";

type ApiError = (StatusCode, Json<Value>);

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Backend holding profiles and sessions.
    pub store: Arc<dyn ProfileStore>,
}

impl AppState {
    /// State backed by a fresh in-memory store.
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub fn with_store(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Run a storage call on the blocking pool.
    async fn run<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&dyn ProfileStore) -> Result<T, StoreError> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || f(store.as_ref()))
            .await
            .map_err(|e| StoreError::Task(e.to_string()))?
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api", get(root_handler))
        .route("/api/", get(root_handler))
        .route("/api/profiles", post(create_profile_handler))
        .route("/api/profiles/:session_id", get(profile_history_handler))
        .route("/api/profiles/profile/:profile_id", get(get_profile_handler))
        .route("/api/sessions/:session_id/stats", get(session_stats_handler))
        .route("/api/questionnaire/questions", get(questions_handler))
        .route("/api/questionnaire/readings", post(assessment_handler))
        .route("/api/questionnaire/blockage", post(blockage_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn error_body(status: StatusCode, detail: impl Into<Value>) -> ApiError {
    (status, Json(serde_json::json!({ "detail": detail.into() })))
}

/// Body that failed to parse, reported in the same `detail` shape as
/// validation failures.
fn rejected_body(rejection: JsonRejection) -> ApiError {
    tracing::debug!("Rejected request body: {}", rejection.body_text());
    error_body(rejection.status(), vec![rejection.body_text()])
}

fn unprocessable(message: impl ToString) -> ApiError {
    error_body(StatusCode::UNPROCESSABLE_ENTITY, vec![message.to_string()])
}

fn generation_failed(error: impl std::fmt::Display) -> ApiError {
    tracing::error!("Error creating profile: {}", error);
    error_body(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Error generating profile: {}", error),
    )
}

fn internal_error(context: &str, error: &dyn std::fmt::Display) -> ApiError {
    tracing::error!("{}: {}", context, error);
    error_body(StatusCode::INTERNAL_SERVER_ERROR, context)
}

/// GET /health: liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "chakra-profile",
    }))
}

/// GET /api/: banner with API version.
async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": API_MESSAGE,
        "version": crate::VERSION,
    }))
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

/// Body of `POST /api/profiles`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    pub energy_centers: EnergyCenterReadings,
}

/// POST /api/profiles: validate readings, derive a profile, store it.
///
/// Request:  `{ "sessionId"?: String, "energyCenters": { <center>: {frequency, balance, blockage} } }`
/// Response: `{ "success": true, "sessionId", "profileId", "profile", "metrics" }`
///
/// A missing or empty `sessionId` is replaced by a new UUID.
async fn create_profile_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProfileRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload.map_err(rejected_body)?;
    if let Err(issues) = request.energy_centers.validate() {
        let detail: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
        return Err(error_body(StatusCode::UNPROCESSABLE_ENTITY, detail));
    }

    let session_id = request
        .session_id
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let generated = profile::derive(&request.energy_centers).map_err(generation_failed)?;

    let metrics = profile::summarize(&request.energy_centers).map_err(generation_failed)?;

    let record = ProfileRecord::new(&session_id, request.energy_centers, generated);
    let profile_id = record.id.clone();
    let profile = record.generated_profile.clone();

    let session = state
        .run(move |store| store.record_profile(&record))
        .await
        .map_err(generation_failed)?;

    tracing::info!(
        session_id = %session_id,
        profile_id = %profile_id,
        level = %profile.overall_level,
        profile_count = session.profile_count,
        "Profile created"
    );

    Ok(Json(serde_json::json!({
        "success": true,
        "sessionId": session_id,
        "profileId": profile_id,
        "profile": profile,
        "metrics": metrics,
    })))
}

/// GET /api/profiles/:session_id: up to 50 profiles, newest first.
async fn profile_history_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let lookup_id = session_id.clone();
    let profiles = state
        .run(move |store| store.profiles_for_session(&lookup_id, HISTORY_LIMIT))
        .await
        .map_err(|e| internal_error("Error fetching profile history", &e))?;

    tracing::debug!(session_id = %session_id, count = profiles.len(), "Profile history fetched");

    Ok(Json(serde_json::json!({
        "success": true,
        "sessionId": session_id,
        "profiles": profiles,
    })))
}

/// GET /api/profiles/profile/:profile_id: 404 when absent.
async fn get_profile_handler(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let lookup_id = profile_id.clone();
    let profile = state
        .run(move |store| store.profile_by_id(&lookup_id))
        .await
        .map_err(|e| internal_error("Error fetching profile", &e))?
        .ok_or_else(|| {
            tracing::debug!(profile_id = %profile_id, "Profile not found");
            error_body(StatusCode::NOT_FOUND, "Profile not found")
        })?;

    Ok(Json(serde_json::json!({
        "success": true,
        "profile": profile,
    })))
}

/// GET /api/sessions/:session_id/stats: zero count for unknown sessions.
async fn session_stats_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let session = state
        .run(move |store| store.session(&session_id))
        .await
        .map_err(|e| internal_error("Error fetching session stats", &e))?;

    let stats = match session {
        Some(session) => serde_json::json!({
            "profileCount": session.profile_count,
            "firstVisit": session.created_at,
            "lastVisit": session.last_accessed_at,
        }),
        None => serde_json::json!({
            "profileCount": 0,
            "firstVisit": null,
        }),
    };

    Ok(Json(serde_json::json!({ "success": true, "stats": stats })))
}

// ---------------------------------------------------------------------------
// Questionnaires
// ---------------------------------------------------------------------------

/// GET /api/questionnaire/questions: both question sets.
async fn questions_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "assessment": ASSESSMENT_QUESTIONS,
        "blockage": BLOCKAGE_QUESTIONS,
    }))
}

#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub responses: HashMap<String, i64>,
}

/// POST /api/questionnaire/readings: `{ "responses": { id: 1..5 } }` to readings.
async fn assessment_handler(
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload.map_err(rejected_body)?;
    let readings =
        questionnaire::readings_from_responses(&request.responses).map_err(unprocessable)?;

    Ok(Json(serde_json::json!({
        "success": true,
        "energyCenters": readings,
    })))
}

#[derive(Debug, Deserialize)]
pub struct BlockageRequest {
    #[serde(default)]
    pub answers: HashMap<String, BlockageAnswer>,
}

/// POST /api/questionnaire/blockage: `{ "answers": { id: "Often" } }` to
/// per-center recommendations.
async fn blockage_handler(
    payload: Result<Json<BlockageRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload.map_err(rejected_body)?;
    let recommendations = questionnaire::recommend(&request.answers).map_err(unprocessable)?;

    Ok(Json(serde_json::json!({
        "success": true,
        "recommendations": recommendations,
    })))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
