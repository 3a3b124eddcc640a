//! HTTP API server.

mod handlers;
pub mod routes;
mod state;


use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use miette::Diagnostic;
use thiserror::Error;

use crate::config::Config;
use crate::db::Database;

pub use handlers::ErrorResponse;
pub use state::AppState;

/// Server errors. Both are fatal.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(code(todo_api::api::bind), help("Is another process using this port?"))]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(todo_api::api::serve))]
    Serve(#[source] std::io::Error),
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the API server with the given configuration and database.
///
/// The database is expected to be connected already; this only binds and
/// serves until Ctrl-C or SIGTERM.
pub async fn run<D: Database + 'static>(config: &Config, db: D) -> Result<(), ApiError> {
    let static_dir = config
        .environment
        .is_production()
        .then_some(config.static_dir.as_path());
    if let Some(dir) = static_dir {
        info!("Serving static assets from {}", dir.display());
    }

    let app = routes::create_router(AppState::new(db), static_dir)
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind { addr, source })?;
    info!("API server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ApiError::Serve)?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
