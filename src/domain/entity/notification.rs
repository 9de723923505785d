use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An inbound AMF event notification. The body is arbitrary JSON and is not
/// validated against a schema; the record is logged and then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub path: String,
    pub body: serde_json::Value,
    pub received_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(path: String, body: serde_json::Value) -> Self {
        Self {
            path,
            body,
            received_at: Utc::now(),
        }
    }
}
