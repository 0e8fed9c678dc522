//! Application builder: wires router, middleware and state into an Axum app.

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::middleware::{from_fn, from_fn_with_state};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use quickinit_core::config::ServerConfig;
use quickinit_core::error::AppError;
use quickinit_core::result::AppResult;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::exception::log_handled_errors;
use crate::middleware::interceptor::intercept;
use crate::middleware::logging::request_logging;
use crate::middleware::panic::handle_panic;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
///
/// Layers, innermost first: panic catching, the interceptor chain, error
/// logging, access logging, CORS, tracing spans.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    let interceptors = state.interceptors.clone();

    build_router(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(from_fn_with_state(interceptors, intercept))
        .layer(from_fn(log_handled_errors))
        .layer(from_fn(request_logging))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Binds the listener and serves `app` until a shutdown signal arrives.
///
/// In-flight requests get `shutdown_grace_seconds` to finish.
pub async fn serve(app: Router, config: &ServerConfig) -> AppResult<()> {
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("QuickInit server listening on {}", addr);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        shutdown_signal().await;
        info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    })
    .into_future();

    let grace = Duration::from_secs(config.shutdown_grace_seconds);
    let grace_elapsed = async move {
        if shutdown_rx.changed().await.is_ok() {
            tokio::time::sleep(grace).await;
        } else {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = grace_elapsed => {
            warn!(grace_seconds = grace.as_secs(), "Grace period elapsed, closing open connections");
        }
    }

    info!("QuickInit server shut down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
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
}
