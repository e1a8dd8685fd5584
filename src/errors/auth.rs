use poem_openapi::{payload::Json, ApiResponse};

use crate::types::dto::common::ErrorResponse;

/// Authentication and authorization error types.
///
/// The 401 variants mean the caller has no usable identity; `Forbidden`
/// means the identity is valid but the role lacks the required permission.
/// The two must never be conflated.
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Invalid email or password
    #[oai(status = 401)]
    InvalidCredentials(Json<ErrorResponse>),

    /// Invalid or malformed JWT
    #[oai(status = 401)]
    InvalidToken(Json<ErrorResponse>),

    /// JWT has expired
    #[oai(status = 401)]
    ExpiredToken(Json<ErrorResponse>),

    /// Valid identity but missing the required permission
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl AuthError {
    /// Create an InvalidCredentials error
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(Json(ErrorResponse {
            error: "invalid_credentials".to_string(),
            message: "Invalid email or password".to_string(),
            status_code: 401,
        }))
    }

    /// Create an InvalidToken error
    pub fn invalid_token() -> Self {
        AuthError::InvalidToken(Json(ErrorResponse {
            error: "invalid_token".to_string(),
            message: "Invalid or malformed JWT".to_string(),
            status_code: 401,
        }))
    }

    /// Create an ExpiredToken error
    pub fn expired_token() -> Self {
        AuthError::ExpiredToken(Json(ErrorResponse {
            error: "expired_token".to_string(),
            message: "JWT has expired".to_string(),
            status_code: 401,
        }))
    }

    /// Create a Forbidden error naming the missing permission
    pub fn forbidden(permission: &str) -> Self {
        AuthError::Forbidden(Json(ErrorResponse {
            error: "forbidden".to_string(),
            message: format!("Missing required permission '{}'", permission),
            status_code: 403,
        }))
    }

    /// Create an InternalError with a custom message
    pub fn internal_error(message: impl Into<String>) -> Self {
        AuthError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: message.into(),
            status_code: 500,
        }))
    }
}
