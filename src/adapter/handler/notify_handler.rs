use axum::body::Bytes;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use tracing::{error, info};

use crate::domain::entity::notification::Notification;

/// POST /notify - Receive an AMF event notification.
///
/// The body is parsed as JSON best-effort; no schema validation and no
/// correlation-ID check. 5G SBIs expect 204 No Content on success. Both
/// responses carry an empty body.
pub async fn receive_notification(uri: Uri, body: Bytes) -> impl IntoResponse {
    match serde_json::from_slice::<serde_json::Value>(&body) {
        Ok(value) => {
            let notification = Notification::new(uri.path().to_string(), value);
            info!(
                path = %notification.path,
                body = %notification.body,
                "notification received"
            );
            StatusCode::NO_CONTENT
        }
        Err(e) => {
            error!(error = %e, "failed to parse notification body");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
