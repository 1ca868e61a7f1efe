//! Liveness probe used by the deployment pipeline once the listener is up.

use tracing::{debug, instrument};

pub const HEALTHY: &str = "OK - Application is healthy";

#[instrument]
pub async fn health_check() -> &'static str {
    debug!("Health check endpoint accessed");
    HEALTHY
}
