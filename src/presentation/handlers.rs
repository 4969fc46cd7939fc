// HTTP request handlers
use crate::domain::tracker::Tracker;
use crate::infrastructure::http_response::ApiError;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Merged view of every tracker position with its device
pub async fn get_trackers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Tracker>>, ApiError> {
    let trackers = state.tracker_service.get_trackers().await?;
    Ok(Json(trackers))
}

/// Proxy a single Mapbox endpoint, forwarding the caller's query parameters.
/// The access token never comes from the caller; the client injects it.
pub async fn mapbox_proxy(
    Path(endpoint): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let body = state.map_service.fetch_resource(&endpoint, &params).await?;
    Ok(Json(body))
}

/// Overwrite the stored drawing document
pub async fn save_drawings(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<&'static str, ApiError> {
    state.drawing_service.save(body).await?;
    Ok("drawings saved")
}

/// Return the stored drawing document
pub async fn load_drawings(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let document = state.drawing_service.load().await?;
    Ok(Json(document.into_value()))
}
