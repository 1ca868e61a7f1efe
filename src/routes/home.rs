//! Landing page checked by the pipeline smoke test.

use tracing::{debug, instrument};

pub const GREETING: &str = "Hello Jenkins Demo! L'application fonctionne parfaitement 🚀";

#[instrument]
pub async fn home() -> &'static str {
    debug!("Home page requested");
    GREETING
}
