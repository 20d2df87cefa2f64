//! Server entrypoint: configuration, database, router, rate limiter, listen.

use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use streamflow::api::{self, AppState};
use streamflow::config;
use streamflow::errors::{Error, Result};
use streamflow::solana::SolanaClient;
use tokio::net::TcpListener;
use tower_governor::GovernorLayer;
use tower_governor::governor::GovernorConfigBuilder;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 3. Load the main application configuration
    let app_config = config::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    // 4. Initialize the database
    let db = config::database::create_connection(&app_config.database_url)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;
    config::database::create_tables(&db).await?;

    // 5. Build the application state and router
    let port = app_config.port;
    let state = AppState {
        db,
        solana: Arc::new(SolanaClient::new(&app_config.solana_rpc_url)),
        config: Arc::new(app_config),
    };

    // 100 requests per 15 minutes per client IP: one permit replenished
    // every 9 seconds, with a burst bucket of 100.
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(9)
            .burst_size(100)
            .finish()
            .ok_or_else(|| Error::Config {
                message: "invalid rate limiter configuration".to_string(),
            })?,
    );
    let app = api::router(state).layer(GovernorLayer {
        config: governor_config,
    });

    // 6. Serve (connect info is needed for per-IP rate limiting)
    let listener = TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], port))).await?;
    info!("Server is running on port {port}");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
