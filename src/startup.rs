use std::future::Future;

use tokio::net::TcpListener;
use tracing::info;

use crate::{config::AppConfig, errors::startup_error::StartupError, routes::register_routes};

/// Binds the listener described by `config`. Port `0` picks a free port.
pub async fn bind(config: &AppConfig) -> Result<TcpListener, StartupError> {
    let addr = config
        .socket_addr()
        .map_err(|source| StartupError::BindAddress {
            host: config.app_server_host.clone(),
            source,
        })?;

    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Listening.");
    Ok(listener)
}

/// Serves the app on `listener` until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, register_routes())
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped.");
    Ok(())
}
