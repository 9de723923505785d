use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use super::AppState;

pub async fn healthz(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": state.service_name,
        "version": state.version
    }))
}

pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ready",
        "service": state.service_name,
        "version": state.version
    }))
}
