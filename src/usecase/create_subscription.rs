use std::sync::Arc;

use tracing::info;

use crate::domain::entity::subscription::{CreateSubscriptionRequest, EventSubscription};
use crate::domain::service::subscription_client::{SubscriptionClient, SubscriptionClientError};

#[derive(Debug, Clone)]
pub struct CreateSubscriptionInput {
    pub subscription: EventSubscription,
}

#[derive(Debug, Clone)]
pub struct CreateSubscriptionOutput {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateSubscriptionError {
    #[error("subscription request failed: {0}")]
    Client(#[from] SubscriptionClientError),
}

/// The sender's single operation: post the subscription once and hand back
/// whatever the AMF answered.
pub struct CreateSubscriptionUseCase {
    client: Arc<dyn SubscriptionClient>,
}

impl CreateSubscriptionUseCase {
    pub fn new(client: Arc<dyn SubscriptionClient>) -> Self {
        Self { client }
    }

    pub async fn execute(
        &self,
        input: &CreateSubscriptionInput,
    ) -> Result<CreateSubscriptionOutput, CreateSubscriptionError> {
        let request = CreateSubscriptionRequest {
            subscription: input.subscription.clone(),
        };

        let response = self.client.create(&request).await?;

        info!(
            status = response.status,
            correlation_id = %input.subscription.notify_correlation_id,
            "subscription request answered"
        );

        Ok(CreateSubscriptionOutput {
            status: response.status,
            body: response.body,
        })
    }
}
