use newsroom_core::application::{
    ports::{
        events::EventPublisher, security::IdentityProvider, time::Clock, util::IdGenerator,
    },
    services::ApplicationServices,
};
use newsroom_core::config::{AppConfig, StorageBackend};
use newsroom_core::domain::TransactionManager;
use newsroom_core::infrastructure::{
    database,
    events::{ChannelEventPublisher, spawn_event_logger},
    repositories::{InMemoryTransactionManager, PostgresTransactionManager},
    security::StaticTokenIdentityProvider,
    time::SystemClock,
    util::UuidIdGenerator,
};
use newsroom_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let transactions: Arc<dyn TransactionManager> = match config.storage_backend() {
        StorageBackend::Postgres => {
            let url = config
                .database_url()
                .context("DATABASE_URL is required for the postgres backend")?;
            let pool = database::init_pool(url, config.database_max_connections()).await?;
            database::run_migrations(&pool).await?;
            Arc::new(PostgresTransactionManager::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("using the in-memory store, data is lost on shutdown");
            Arc::new(InMemoryTransactionManager::new())
        }
    };

    let identity = StaticTokenIdentityProvider::parse(config.api_tokens())?;
    if identity.is_empty() {
        tracing::warn!("API_TOKENS is empty, every protected endpoint will answer 401");
    }
    let identity_provider: Arc<dyn IdentityProvider> = Arc::new(identity);

    let (publisher, receiver) = ChannelEventPublisher::channel();
    let event_logger = spawn_event_logger(receiver);
    let events: Arc<dyn EventPublisher> = Arc::new(publisher);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let ids: Arc<dyn IdGenerator> = Arc::new(UuidIdGenerator);

    let services = Arc::new(ApplicationServices::new(
        transactions,
        identity_provider,
        clock,
        ids,
        events,
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Dropping the last publisher closes the channel and lets the logger drain.
    drop(services);
    if tokio::time::timeout(Duration::from_secs(5), event_logger)
        .await
        .is_err()
    {
        tracing::warn!("event logger did not drain before shutdown");
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
