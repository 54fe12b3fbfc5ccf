//! Structured API errors
//!
//! The remote conference API reports failures either through HTTP status
//! codes or through `status: "error"` envelopes whose messages come straight
//! from the backing store. All of that is classified ONCE here into an
//! [`ApiErrorCode`]; callers branch on the code, never on message text.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classified error category for a remote API failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    /// A uniqueness constraint rejected an insert (duplicate key / HTTP 409)
    UniqueViolation,
    /// Resource not found
    NotFound,
    /// Request rejected as invalid (HTTP 400/422)
    Validation,
    /// Missing or insufficient credentials (HTTP 401/403)
    Unauthorized,
    /// The API reported an error envelope we could not classify further
    Rejected,
    /// Anything else
    Unknown,
}

/// Error returned by the remote conference API
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Classified error category
    pub code: ApiErrorCode,
    /// HTTP status the response carried, if any
    pub http_status: Option<u16>,
    /// Message from the error envelope or response body
    pub message: String,
}

/// Markers the legacy backend embeds in duplicate-key messages. Substring
/// matching is a fallback for that one API and lives only in `classify`.
const DUPLICATE_MARKERS: &[&str] = &["duplicate key", "e11000", "already exists"];

impl ApiError {
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            http_status: None,
            message: message.into(),
        }
    }

    /// Classify a failure from its HTTP status and message text.
    ///
    /// HTTP 409 is authoritative for uniqueness conflicts; the message
    /// markers cover the legacy API, which surfaces store-level duplicate-key
    /// errors as 500s with the raw message.
    pub fn classify(http_status: Option<u16>, message: impl Into<String>) -> Self {
        let message = message.into();
        let lowered = message.to_lowercase();

        let code = if http_status == Some(StatusCode::CONFLICT.as_u16())
            || DUPLICATE_MARKERS.iter().any(|m| lowered.contains(m))
        {
            ApiErrorCode::UniqueViolation
        } else {
            match http_status.and_then(|s| StatusCode::from_u16(s).ok()) {
                Some(StatusCode::NOT_FOUND) => ApiErrorCode::NotFound,
                Some(StatusCode::BAD_REQUEST) | Some(StatusCode::UNPROCESSABLE_ENTITY) => {
                    ApiErrorCode::Validation
                }
                Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN) => {
                    ApiErrorCode::Unauthorized
                }
                Some(_) => ApiErrorCode::Rejected,
                None => ApiErrorCode::Unknown,
            }
        };

        Self {
            code,
            http_status,
            message,
        }
    }

    /// True when this error is a (member, event) uniqueness conflict —
    /// the one class the attendee upsert recovers from.
    pub fn is_unique_violation(&self) -> bool {
        self.code == ApiErrorCode::UniqueViolation
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::new(ApiErrorCode::NotFound, format!("{} not found", r))
    }

    /// Create an error for an envelope that parsed but carried no data
    pub fn missing_data(context: impl Into<String>) -> Self {
        Self::new(
            ApiErrorCode::Rejected,
            format!("{}: response carried no data", context.into()),
        )
    }
}
