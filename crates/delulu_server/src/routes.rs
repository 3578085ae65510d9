//! HTTP routes.

use crate::{ApiError, AppState, ServiceInfo, panic_response, read_upload, verify_upload};
use axum::{
    Json, Router,
    extract::{
        DefaultBodyLimit, Multipart, State, multipart::MultipartRejection,
        rejection::JsonRejection,
    },
    routing::{get, post},
};
use delulu_core::{
    CharacterNameRequest, CharacterProfile, CharacterQuery, GenerationRequest, Payload,
    StoryResponse,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};
use tracing::{info, instrument};

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Always "ok" when the process answers
    pub status: String,
    /// RFC 3339 time of the check
    pub timestamp: String,
    /// Configured collaborators
    pub services: ServiceInfo,
}

/// Build the application router.
///
/// CORS is fully permissive. `body_limit` caps every request body, uploads
/// included. A panicking handler answers 500 with a `{detail}` body.
pub fn create_router(state: AppState, body_limit: usize) -> Router {
    let mut router = Router::new()
        .route("/generate-story-segment", post(generate_story_segment))
        .route(
            "/generate-character-details-name",
            post(generate_character_details_name),
        )
        .route(
            "/generate-character-details-image",
            post(generate_character_details_image),
        )
        .route("/health", get(health));

    if let Some(dir) = state.static_dir() {
        info!(path = %dir.display(), "Serving cached images under /cache");
        router = router.nest_service("/cache", ServeDir::new(dir));
    }

    router
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[instrument(skip_all)]
async fn generate_story_segment(
    State(state): State<AppState>,
    body: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<Payload<StoryResponse>>, ApiError> {
    let Json(request) = body?;
    let story = state.orchestrator().generate_segment(&request).await;
    Ok(Json(Payload::from(story)))
}

#[instrument(skip_all)]
async fn generate_character_details_name(
    State(state): State<AppState>,
    body: Result<Json<CharacterNameRequest>, JsonRejection>,
) -> Result<Json<Payload<CharacterProfile>>, ApiError> {
    let Json(request) = body?;
    let profile = state
        .characters()
        .lookup(&CharacterQuery::Name(request.name))
        .await;
    Ok(Json(Payload::from(profile)))
}

#[instrument(skip_all)]
async fn generate_character_details_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Payload<CharacterProfile>>, ApiError> {
    let bytes = read_upload(multipart?).await?;
    let image = verify_upload(bytes).await?;
    let profile = state
        .characters()
        .lookup(&CharacterQuery::Photo {
            bytes: image.bytes,
            mime: image.mime,
        })
        .await;
    Ok(Json(Payload::from(profile)))
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        services: state.services().clone(),
    })
}
