use async_trait::async_trait;

use crate::domain::entity::subscription::CreateSubscriptionRequest;

#[derive(Debug, thiserror::Error)]
pub enum SubscriptionClientError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("subscription client error: {0}")]
    Other(String),
}

/// Whatever the AMF answered, verbatim. A non-2xx status is still a
/// response, not a transport error.
#[derive(Debug, Clone)]
pub struct SubscriptionResponse {
    pub status: u16,
    pub body: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriptionClient: Send + Sync {
    async fn create(
        &self,
        request: &CreateSubscriptionRequest,
    ) -> Result<SubscriptionResponse, SubscriptionClientError>;
}
