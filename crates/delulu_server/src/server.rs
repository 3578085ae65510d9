//! Server startup.

use crate::{AppState, DeluluConfig, ServerSettings, build_state, create_router};
use delulu_error::{DeluluResult, ServerError, ServerErrorKind};
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

/// Build the clients from `config` and serve until Ctrl-C.
///
/// # Errors
///
/// Bootstrap failures, a port that cannot be bound, or a fatal server error.
pub async fn serve(config: DeluluConfig) -> DeluluResult<()> {
    let state = build_state(&config)?;
    serve_with_state(state, &config.server).await
}

/// Serve an already-built state.
#[instrument(skip_all, fields(host = %settings.host, port = settings.port))]
pub async fn serve_with_state(state: AppState, settings: &ServerSettings) -> DeluluResult<()> {
    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Bind(format!("{}: {}", addr, e))))?;

    info!(addr = %addr, "Delulu server listening");

    axum::serve(listener, create_router(state, settings.body_limit_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("Delulu server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = until_signal("ctrl-c", tokio::signal::ctrl_c());

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!(signal = "ctrl-c", "Shutdown signal received"),
        () = terminate => info!(signal = "sigterm", "Shutdown signal received"),
    }
}

/// Wait for `listener`; if it cannot be installed, never resolve.
async fn until_signal<F>(name: &'static str, listener: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = listener.await {
        warn!(signal = name, error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
