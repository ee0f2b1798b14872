//! Core module containing the error types and input validation helpers

pub mod error;
pub mod validation;

pub use error::{ApiError, ApiResult, StoreError, ValidationError};
