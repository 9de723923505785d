//! One-shot demonstration client/server for AMF event-exposure subscriptions.
//!
//! Starts an HTTP notification receiver, then fires a single subscription
//! request at the configured AMF once the listener is bound. Received
//! notifications are logged and acknowledged with 204 No Content.

pub mod adapter;
pub mod domain;
pub mod infrastructure;
pub mod usecase;
