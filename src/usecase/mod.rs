pub mod create_subscription;

pub use create_subscription::{
    CreateSubscriptionError, CreateSubscriptionInput, CreateSubscriptionOutput,
    CreateSubscriptionUseCase,
};
