use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::{envelope::JSONAPI_MEDIA_TYPE, error::ApiError, sun_phase::SunPhaseService};

pub const SUN_PHASE_PATH: &str = "/weather/sun_phase/v1";

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sun_phase: Arc<SunPhaseService>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

// Route handlers
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET only. The router also sends HEAD to GET handlers, so it is rejected here.
pub async fn get_sun_phase(
    method: Method,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    if method != Method::GET {
        return Err(ApiError::method_not_allowed(&method));
    }

    let body = state.sun_phase.current().await.map_err(|e| {
        tracing::error!("Failed to resolve sun phase: {}", e);
        ApiError::from(e)
    })?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, JSONAPI_MEDIA_TYPE)],
        body,
    )
        .into_response())
}

pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::method_not_allowed(&method)
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(uri.path())
}

// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health).fallback(method_not_allowed))
        .route(SUN_PHASE_PATH, get(get_sun_phase).fallback(method_not_allowed))
        .fallback(not_found)
        .with_state(state)
}
