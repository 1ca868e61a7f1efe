use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Errors rendered to HTTP clients.
///
/// None of the demo handlers can fail, so the only producer is the router
/// fallback for unmatched paths.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("No route for {path}"),
            ),
        };

        let body = ApiErrorResponse {
            error: error.to_owned(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
