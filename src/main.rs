use std::sync::Arc;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sun_phase_server::astronomy::WundergroundClient;
use sun_phase_server::cache::RedisStore;
use sun_phase_server::config::Config;
use sun_phase_server::routes::{create_router, AppState, SUN_PHASE_PATH};
use sun_phase_server::sun_phase::SunPhaseService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sun_phase_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;

    let cache = RedisStore::connect(&config.redis_url()).await.map_err(|e| {
        tracing::error!("Failed to connect to Redis at {}: {}", config.redis_addr, e);
        e
    })?;
    tracing::info!("Connected to Redis at {}", config.redis_addr);

    let astronomy = WundergroundClient::new(&config)?;

    let service = SunPhaseService::new(Arc::new(cache), Arc::new(astronomy), config.redis_prefix.clone());
    let state = AppState {
        sun_phase: Arc::new(service),
    };

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Ready: serving GET {} on http://{}", SUN_PHASE_PATH, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
