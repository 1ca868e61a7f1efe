//! # Demo Payload Handler
//!
//! Serves the fixed pipeline-status record at `/api/demo`. The only value that
//! changes between calls is the timestamp, taken when the request is handled.

use crate::utils::epoch_millis_serde;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

pub const PROJECT: &str = "Jenkins CI/CD";
pub const STATUS_SUCCESS: &str = "SUCCESS";

//
// ----------- Data Structures -----------
//

/// Body returned by `GET /api/demo`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DemoResponse {
    pub project: String,
    pub status: String,
    /// Epoch milliseconds on the wire.
    #[serde(with = "epoch_millis_serde")]
    pub timestamp: DateTime<Utc>,
}

impl DemoResponse {
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            project: PROJECT.to_owned(),
            status: STATUS_SUCCESS.to_owned(),
            timestamp,
        }
    }

    pub fn now() -> Self {
        Self::at(Utc::now())
    }
}

//
// ----------- Handlers -----------
//

#[instrument(ret)]
pub async fn get_demo() -> Json<DemoResponse> {
    let response = DemoResponse::now();
    info!(
        timestamp = response.timestamp.timestamp_millis(),
        "Serving demo payload."
    );
    Json(response)
}

//
// ----------- Tests -----------
//
