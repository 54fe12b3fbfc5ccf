//! Shared types for the congreso toolkit
//!
//! Wire models, response envelope, and structured API error codes used by
//! both the HTTP client and the bulk import engine.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use error::{ApiError, ApiErrorCode};
pub use response::{PageData, ResponseDto};
pub use serde::{Deserialize, Serialize};
