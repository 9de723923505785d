pub mod subscription_client;

pub use subscription_client::{SubscriptionClient, SubscriptionClientError, SubscriptionResponse};
