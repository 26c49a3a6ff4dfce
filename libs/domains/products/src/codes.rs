//! Stable error codes and the HTTP status each one maps to.
//!
//! This table is the single source of truth for [`crate::MessageErr`]: a
//! variant picks its code, and the code decides status and token.
//!
//! ```rust
//! use domain_products::ErrorCode;
//! use axum::http::StatusCode;
//!
//! let code = ErrorCode::NotFound;
//! assert_eq!(code.as_str(), "NOT_FOUND");
//! assert_eq!(code.status(), StatusCode::NOT_FOUND);
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Payload failed validation
    BadRequest,

    /// Caller is not authenticated or does not own the resource
    Unauthorized,

    /// Requested product does not exist
    NotFound,

    /// Store or transport fault
    InternalServerError,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 4] = [
        ErrorCode::BadRequest,
        ErrorCode::Unauthorized,
        ErrorCode::NotFound,
        ErrorCode::InternalServerError,
    ];

    /// Machine-readable token, suitable for logs and metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotFound => "NOT_FOUND",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
