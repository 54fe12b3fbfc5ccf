//! API response envelope
//!
//! Every conference API endpoint answers with the same envelope:
//!
//! ```json
//! {
//!     "status": "success",
//!     "message": "OK",
//!     "data": { ... }
//! }
//! ```
//!
//! where `data` is either a single entity or a paginated page. The envelope
//! is decoded exactly once, at the HTTP boundary, into a typed `Result`;
//! nothing downstream sees optional nesting.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// Envelope `status` value for a successful response
pub const STATUS_SUCCESS: &str = "success";

/// Unified response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseDto<T> {
    /// `"success"` or `"error"`
    pub status: String,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Payload, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Backend error detail, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

impl<T> ResponseDto<T> {
    /// Create a success envelope (used by test fixtures)
    pub fn success(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: "OK".to_string(),
            data: Some(data),
            error: None,
        }
    }

    /// Create an error envelope (used by test fixtures)
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            data: None,
            error: None,
        }
    }

    /// Collapse the envelope into a typed result.
    ///
    /// `http_status` is the status of the carrying response; it feeds error
    /// classification when the envelope reports a failure.
    pub fn into_result(self, http_status: Option<u16>) -> Result<T, ApiError> {
        if self.status == STATUS_SUCCESS {
            match self.data {
                Some(data) => Ok(data),
                None => Err(ApiError::missing_data(self.message)),
            }
        } else {
            Err(ApiError::classify(http_status, self.message))
        }
    }
}

/// Paginated page shape used by search endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData<T> {
    /// Items on this page
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Total matching items
    #[serde(default)]
    pub total_items: u64,
    /// Total pages at the requested page size
    #[serde(default)]
    pub total_pages: u32,
    /// 1-based page number
    #[serde(default)]
    pub current_page: u32,
}

impl<T> PageData<T> {
    /// Take the first item of the page, if any
    pub fn into_first(self) -> Option<T> {
        self.items.into_iter().next()
    }
}

impl<T> Default for PageData<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_pages: 0,
            current_page: 0,
        }
    }
}
