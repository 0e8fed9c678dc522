//! QuickInit Server
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use quickinit_api::AppState;
use quickinit_core::config::AppConfig;
use quickinit_core::error::AppError;
use quickinit_database::Mappers;

#[tokio::main]
async fn main() {
    let env = std::env::var("QUICKINIT_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!("Loaded configuration (env: {})", env);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting QuickInit v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!(driver = ?config.database.driver, "Initializing mappers...");
    let mappers = Mappers::from_config(&config.database).await?;

    let server_config = config.server.clone();
    let state = AppState::new(config, &mappers);
    tracing::info!(
        interceptors = ?state.interceptors.names(),
        "Services initialized"
    );

    let app = quickinit_api::build_app(state);
    quickinit_api::serve(app, &server_config).await?;

    if let Some(pool) = &mappers.pool {
        tracing::info!("Closing database pool...");
        pool.close().await;
    }

    tracing::info!("QuickInit server shut down gracefully");
    Ok(())
}
