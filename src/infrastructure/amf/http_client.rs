use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::domain::entity::subscription::CreateSubscriptionRequest;
use crate::domain::service::subscription_client::{
    SubscriptionClient, SubscriptionClientError, SubscriptionResponse,
};
use crate::infrastructure::config::AmfConfig;

/// HTTP implementation of the subscription port. Fire-once: no retry, no
/// backoff; any transport failure is reported to the caller as-is.
pub struct AmfSubscriptionClient {
    subscription_url: String,
    client: reqwest::Client,
}

impl AmfSubscriptionClient {
    pub fn new(cfg: &AmfConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()?;
        Ok(Self {
            subscription_url: cfg.subscription_url(),
            client,
        })
    }
}

#[async_trait]
impl SubscriptionClient for AmfSubscriptionClient {
    async fn create(
        &self,
        request: &CreateSubscriptionRequest,
    ) -> Result<SubscriptionResponse, SubscriptionClientError> {
        info!(url = %self.subscription_url, "sending subscription request");

        let response = self
            .client
            .post(&self.subscription_url)
            .json(request)
            .send()
            .await
            .map_err(|e| SubscriptionClientError::ConnectionFailed(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown".to_string());

        Ok(SubscriptionResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::subscription::{AmfEventType, EventSubscription};
    use uuid::Uuid;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: String) -> AmfConfig {
        AmfConfig {
            base_url,
            subscription_path: "/namf-evts/v1/subscriptions".to_string(),
            request_timeout_secs: 5,
        }
    }

    fn test_request() -> CreateSubscriptionRequest {
        CreateSubscriptionRequest {
            subscription: EventSubscription::new(
                &AmfEventType::all(),
                "http://127.0.0.1:4040/notify".to_string(),
                "notif-001".to_string(),
                Uuid::parse_str("123e4567-e89b-12d3-a456-426614174000").unwrap(),
            ),
        }
    }

    #[tokio::test]
    async fn test_create_returns_status_and_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/namf-evts/v1/subscriptions"))
            .and(header("content-type", "application/json"))
            .respond_with(
                ResponseTemplate::new(201).set_body_string(r#"{"subscriptionId":"sub-1"}"#),
            )
            .mount(&mock_server)
            .await;

        let client = AmfSubscriptionClient::new(&test_config(mock_server.uri())).unwrap();
        let response = client.create(&test_request()).await.unwrap();
        assert_eq!(response.status, 201);
        assert_eq!(response.body, r#"{"subscriptionId":"sub-1"}"#);
    }

    #[tokio::test]
    async fn test_non_2xx_is_a_response_not_an_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .mount(&mock_server)
            .await;

        let client = AmfSubscriptionClient::new(&test_config(mock_server.uri())).unwrap();
        let response = client.create(&test_request()).await.unwrap();
        assert_eq!(response.status, 403);
        assert_eq!(response.body, "forbidden");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connection_failed() {
        // nothing listens on the discard port
        let client =
            AmfSubscriptionClient::new(&test_config("http://127.0.0.1:9".to_string())).unwrap();
        let result = client.create(&test_request()).await;
        match result.unwrap_err() {
            SubscriptionClientError::ConnectionFailed(_) => {}
            e => unreachable!("unexpected error: {:?}", e),
        }
    }
}
