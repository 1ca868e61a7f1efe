pub mod config;
pub mod errors;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;
