use gs_server::error::Result as ServerErrorResult;
use gs_server::{AppState, build_router, logger};

use gs_auth::{GoogleVerifier, TokenService};
use gs_store::StoreHandle;

use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = gs_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = gs_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting gs-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the document store session
    let credentials = config.store_credentials()?;
    let store = Arc::new(StoreHandle::connect(credentials));

    // Session token issuer; the signing key is random per process
    let tokens = Arc::new(TokenService::new(config.auth.token_ttl_secs));

    // External identity verifier for firebase-login
    let verifier = GoogleVerifier::new(
        &config.auth.tokeninfo_url,
        &config.auth.userinfo_url,
        Duration::from_secs(config.auth.verify_timeout_secs),
    )?;

    // Build application state
    let app_state = AppState {
        store: store.clone(),
        tokens,
        verifier: Arc::new(verifier),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Invalidate the store session before exiting
    store.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
        }
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
        }
    }
}
