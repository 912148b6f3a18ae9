//! Server entry point

use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use twm_server::{config, create_app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "twm_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; without the backend connection parameters the
    // server must not come up in a degraded mode, so print the setup
    // instructions and stop.
    dotenvy::dotenv().ok();
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", config::SETUP_HELP);
            anyhow::bail!("configuration error: {err}");
        }
    };

    tracing::info!("Starting Table Water Management Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Managed backend endpoint: {}", config.backend.url);

    let port = config.server.port;
    let state = AppState::new(Arc::new(config));
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
