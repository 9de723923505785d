use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing-subscriber. The default level follows the environment
/// and RUST_LOG overrides it; format switches between plain text and JSON.
///
/// - dev: debug
/// - staging: info
/// - prod: warn
pub fn init(environment: &str, format: &str) {
    let default_level = match environment {
        "dev" => "debug",
        "staging" => "info",
        _ => "warn",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);

    if format == "text" {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_span_events(fmt::format::FmtSpan::CLOSE),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_span_events(fmt::format::FmtSpan::CLOSE),
            )
            .init();
    }
}
