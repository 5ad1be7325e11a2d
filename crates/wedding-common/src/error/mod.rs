//! Application error types

mod app_error;

pub use app_error::{domain_error_code, domain_status_code, AppError};
