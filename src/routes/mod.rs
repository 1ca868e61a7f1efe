use axum::{http::Uri, routing::get, Router};
use demo::get_demo;
use health_check::health_check;
use home::home;
use tower_http::trace::TraceLayer;

use crate::errors::api_error::ApiError;

pub mod demo;
pub mod health_check;
pub mod home;

pub fn register_routes() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route("/api/demo", get(get_demo))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_owned())
}
