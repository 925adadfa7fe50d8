//! HTTP API.
//!
//! `GET /` reports liveness, `POST /summarize` and `POST /quiz` take
//! `{"url": ...}` and answer with `{"summary": ...}` / `{"quiz": ...}` or an
//! error body `{"detail": ...}`.

use crate::error::StudyError;
use crate::service::{StudyService, StudyTask};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub const LIVENESS_KEY_LOADED: &str = "Server is running securely! (Key Loaded)";
pub const LIVENESS_KEY_MISSING: &str = "Server is running, but API Key is missing!";
pub const TRANSCRIPT_ERROR_PREFIX: &str = "자막을 가져올 수 없습니다";

/// Shared application state.
pub struct AppState {
    pub service: StudyService,
}

/// Build the API router.
pub fn router(service: StudyService) -> Router {
    let state = Arc::new(AppState { service });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(liveness))
        .route("/summarize", post(summarize))
        .route("/quiz", post(quiz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// === Request/Response Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct VideoRequest {
    /// Video link.
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizResponse {
    pub quiz: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// An error on its way out as `{"detail": ...}`.
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }
}

impl From<StudyError> for ApiError {
    fn from(err: StudyError) -> Self {
        let status = StatusCode::from_u16(err.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let detail = if err.is_retrieval() {
            format!("{}: {}", TRANSCRIPT_ERROR_PREFIX, err)
        } else {
            err.to_string()
        };
        Self::new(status, detail)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            warn!(status = %self.status, "{}", self.detail);
        }
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

// === Handlers ===

async fn liveness(State(state): State<Arc<AppState>>) -> Json<LivenessResponse> {
    let message = if state.service.has_credential() {
        LIVENESS_KEY_LOADED
    } else {
        LIVENESS_KEY_MISSING
    };
    Json(LivenessResponse {
        message: message.to_string(),
    })
}

async fn summarize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<VideoRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let Json(req) = payload?;
    let summary = state.service.run(StudyTask::Summary, &req.url).await?;
    Ok(Json(SummaryResponse { summary }))
}

async fn quiz(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<VideoRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(req) = payload?;
    let quiz = state.service.run(StudyTask::Quiz, &req.url).await?;
    Ok(Json(QuizResponse { quiz }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retrieval_error_detail() {
        let err: ApiError = StudyError::TranscriptUnavailable("no captions".into()).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.detail,
            "자막을 가져올 수 없습니다: Transcript unavailable: no captions"
        );
    }

    #[test]
    fn test_generation_error_detail() {
        let err: ApiError = StudyError::MissingCredential.into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail, "API Key가 설정되지 않았습니다.");

        let err: ApiError = StudyError::Generation("quota".into()).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.detail.contains("quota"));
    }
}
