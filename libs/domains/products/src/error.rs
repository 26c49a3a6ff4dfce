use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codes::ErrorCode;

/// Message returned when a lookup matches no product.
pub const PRODUCT_NOT_FOUND: &str = "product not found please check again your product";

/// Message returned for any store fault. Driver details only go to the logs.
pub const STORE_FAILURE: &str = "something went wrong";

/// Application error carrying an HTTP status, a human-readable message and a
/// stable code.
///
/// `Display` renders the code (`"NOT_FOUND"`), not the message; use
/// [`MessageErr::message`] for the text meant for clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageErr {
    #[error("BAD_REQUEST")]
    BadRequest(String),

    #[error("UNAUTHORIZED")]
    Unauthorized(String),

    #[error("NOT_FOUND")]
    NotFound(String),

    #[error("INTERNAL_SERVER_ERROR")]
    InternalServerError(String),
}

pub type MessageResult<T> = Result<T, MessageErr>;

impl MessageErr {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::InternalServerError(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::BadRequest(_) => ErrorCode::BadRequest,
            Self::Unauthorized(_) => ErrorCode::Unauthorized,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::InternalServerError(_) => ErrorCode::InternalServerError,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.code().status()
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message)
            | Self::Unauthorized(message)
            | Self::NotFound(message)
            | Self::InternalServerError(message) => message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Store faults become `InternalServerError`; a missing record becomes `NotFound`.
impl From<DbErr> for MessageErr {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(_) => MessageErr::not_found(PRODUCT_NOT_FOUND),
            other => {
                tracing::error!(error = %other, "Product store operation failed");
                MessageErr::internal_server_error(STORE_FAILURE)
            }
        }
    }
}

impl From<validator::ValidationErrors> for MessageErr {
    fn from(err: validator::ValidationErrors) -> Self {
        MessageErr::bad_request(err.to_string())
    }
}

/// JSON body written for a [`MessageErr`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
    pub error: ErrorCode,
}

impl From<&MessageErr> for ErrorBody {
    fn from(err: &MessageErr) -> Self {
        Self {
            status: err.status().as_u16(),
            message: err.message().to_string(),
            error: err.code(),
        }
    }
}

impl IntoResponse for MessageErr {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::from(&self))).into_response()
    }
}
