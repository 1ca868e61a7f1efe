pub mod api_error;
pub mod startup_error;
