use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Confirmation sent back after a successful delete.
pub const PRODUCT_DELETED: &str =
    "your product has been successfully deleted, it is no longer stored in the database";

/// Rejects titles that are empty once surrounding whitespace is removed
fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::new("blank_title"));
    }
    Ok(())
}

/// Product entity as stored in the `products` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Assigned by the store on insert, never reused
    pub id: i32,
    pub title: String,
    pub price: i32,
    /// Owning user; not checked against a users table
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[validate(length(min = 1, max = 255), custom(function = "validate_title"))]
    pub title: String,
    #[validate(range(min = 0))]
    pub price: i32,
    #[validate(range(min = 1))]
    pub user_id: i32,
}

/// Payload for updating a product; only title and price can change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    pub id: i32,
    #[validate(length(min = 1, max = 255), custom(function = "validate_title"))]
    pub title: String,
    #[validate(range(min = 0))]
    pub price: i32,
}

/// Success envelope returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataResponse<T> {
    pub status_code: u16,
    pub message: String,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::OK, message, data)
    }

    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::CREATED, message, data)
    }

    fn with_status(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for DataResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

/// Result of a successful delete: a confirmation, not an error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteConfirmation {
    pub status_code: u16,
    pub message: String,
}

impl DeleteConfirmation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            message: message.into(),
        }
    }
}

impl Default for DeleteConfirmation {
    fn default() -> Self {
        Self::new(PRODUCT_DELETED)
    }
}

impl IntoResponse for DeleteConfirmation {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
