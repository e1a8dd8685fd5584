use poem_openapi::{payload::Json, ApiResponse};

use crate::errors::auth::AuthError;
use crate::types::dto::common::ErrorResponse;
use crate::types::internal::money::AmountParseError;

/// Error types for the customer/agent/order endpoints
#[derive(ApiResponse, Debug)]
pub enum ApiError {
    /// Missing, invalid or expired token
    #[oai(status = 401)]
    Unauthenticated(Json<ErrorResponse>),

    /// Valid identity but missing the required permission
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// Resource does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Malformed request body
    #[oai(status = 400)]
    Validation(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    Internal(Json<ErrorResponse>),
}

impl ApiError {
    /// Create a NotFound error for an arbitrary resource
    pub fn not_found(kind: &str, key: &str) -> Self {
        ApiError::NotFound(Json(ErrorResponse {
            error: "not_found".to_string(),
            message: format!("No {} with key '{}'", kind, key),
            status_code: 404,
        }))
    }

    /// Create a Validation error with a custom message
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(Json(ErrorResponse {
            error: "validation_error".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    /// Create an Internal error with a custom message
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: message.into(),
            status_code: 500,
        }))
    }
}

// Guard failures fold into the resource endpoints' error type so handlers
// can use `?` across authentication and storage calls alike.
impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Forbidden(body) => ApiError::Forbidden(body),
            AuthError::InternalError(body) => ApiError::Internal(body),
            AuthError::InvalidCredentials(body)
            | AuthError::InvalidToken(body)
            | AuthError::ExpiredToken(body) => ApiError::Unauthenticated(body),
        }
    }
}

impl From<AmountParseError> for ApiError {
    fn from(err: AmountParseError) -> Self {
        ApiError::validation(err.to_string())
    }
}
