use dotenvy::dotenv;
use jenkins_demo::{
    config::AppConfig, errors::startup_error::StartupError, startup, telemetry::init_tracing,
};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenv().ok();
    init_tracing();

    if let Err(err) = run().await {
        error!(error = %err, "Server failed to start.");
        return Err(err);
    }

    Ok(())
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;
    let listener = startup::bind(&config).await?;
    startup::run(listener, shutdown_signal()).await
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "Failed to listen for Ctrl-C.");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to listen for SIGTERM.");
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

    info!("Shutdown signal received.");
}
