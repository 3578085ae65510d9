//! Server command handler.

use delulu::{DeluluConfig, DeluluResult};
use tracing::info;

/// Run the HTTP server until Ctrl-C.
pub async fn run_server(
    mut config: DeluluConfig,
    host: Option<String>,
    port: Option<u16>,
) -> DeluluResult<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    info!(
        mode = config.models.mode(),
        cache = %config.cache.backend,
        "Starting Delulu server"
    );
    delulu::serve(config).await
}
