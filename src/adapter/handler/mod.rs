pub mod health;
pub mod notify_handler;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Shared application state for REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub service_name: String,
    pub version: String,
    pub notify_path: String,
}

impl AppState {
    pub fn new(service_name: String, version: String, notify_path: String) -> Self {
        Self {
            service_name,
            version,
            notify_path,
        }
    }
}

/// Build the REST API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route(
            &state.notify_path,
            post(notify_handler::receive_notification),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
