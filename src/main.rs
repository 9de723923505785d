use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::{error, info, warn};

use amf_event_subscriber::adapter::handler::{self, AppState};
use amf_event_subscriber::domain::entity::subscription::EventSubscription;
use amf_event_subscriber::infrastructure::amf::AmfSubscriptionClient;
use amf_event_subscriber::infrastructure::config::Config;
use amf_event_subscriber::infrastructure::telemetry;
use amf_event_subscriber::usecase::{CreateSubscriptionInput, CreateSubscriptionUseCase};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/config.yaml".to_string());
    let cfg = Config::load_or_default(&config_path)?;

    telemetry::init(&cfg.app.environment, &cfg.app.log_format);

    info!(
        app_name = %cfg.app.name,
        version = %cfg.app.version,
        environment = %cfg.app.environment,
        "starting notification server"
    );

    let subscription = EventSubscription::new(
        &cfg.subscription.events,
        cfg.notify_uri(),
        cfg.subscription.notify_correlation_id.clone(),
        cfg.subscription.nf_id,
    );

    let client = Arc::new(AmfSubscriptionClient::new(&cfg.amf)?);
    let create_subscription_uc = CreateSubscriptionUseCase::new(client);
    let subscription_url = cfg.amf.subscription_url();

    // The sender waits for the listener to bind instead of sleeping a fixed
    // delay. Fire-once: a transport error is logged and swallowed.
    let (ready_tx, ready_rx) = oneshot::channel::<()>();
    let sender = tokio::spawn(async move {
        if ready_rx.await.is_err() {
            warn!("server never became ready, subscription request not sent");
            return;
        }

        info!(url = %subscription_url, "server ready, sending subscription request");
        let input = CreateSubscriptionInput { subscription };
        match create_subscription_uc.execute(&input).await {
            Ok(output) => info!(
                status = output.status,
                body = %output.body,
                "subscription request completed"
            ),
            Err(e) => error!(error = %e, "subscription request failed"),
        }
    });

    let state = AppState::new(
        cfg.app.name.clone(),
        cfg.app.version.clone(),
        cfg.subscription.notify_path.clone(),
    );
    let app = handler::router(state);

    let listener =
        tokio::net::TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    info!("notification server listening on {}", listener.local_addr()?);

    let _ = ready_tx.send(());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Err(e) = sender.await {
        error!(error = %e, "subscription sender task failed");
    }

    info!("notification server exited");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = signal::ctrl_c() => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
