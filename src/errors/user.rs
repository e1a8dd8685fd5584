use poem_openapi::{payload::Json, ApiResponse};

use crate::errors::auth::AuthError;
use crate::types::dto::common::ErrorResponse;

/// Error types for the user management endpoints
#[derive(ApiResponse, Debug)]
pub enum UserError {
    /// No user with the given id
    #[oai(status = 404)]
    UserNotFound(Json<ErrorResponse>),

    /// No role with the given name
    #[oai(status = 404)]
    RoleNotFound(Json<ErrorResponse>),

    /// Email already registered
    #[oai(status = 400)]
    DuplicateEmail(Json<ErrorResponse>),

    /// Malformed request body
    #[oai(status = 400)]
    Validation(Json<ErrorResponse>),

    /// Missing, invalid or expired token
    #[oai(status = 401)]
    Unauthenticated(Json<ErrorResponse>),

    /// Valid identity but missing the required permission
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    Internal(Json<ErrorResponse>),
}

impl UserError {
    /// Create a UserNotFound error
    pub fn user_not_found(user_id: &str) -> Self {
        UserError::UserNotFound(Json(ErrorResponse {
            error: "user_not_found".to_string(),
            message: format!("No user with id '{}'", user_id),
            status_code: 404,
        }))
    }

    /// Create a RoleNotFound error
    pub fn role_not_found(role_name: &str) -> Self {
        UserError::RoleNotFound(Json(ErrorResponse {
            error: "role_not_found".to_string(),
            message: format!("No role named '{}'", role_name),
            status_code: 404,
        }))
    }

    /// Create a DuplicateEmail error
    pub fn duplicate_email() -> Self {
        UserError::DuplicateEmail(Json(ErrorResponse {
            error: "duplicate_email".to_string(),
            message: "Email already registered".to_string(),
            status_code: 400,
        }))
    }

    /// Create a Validation error with a custom message
    pub fn validation(message: impl Into<String>) -> Self {
        UserError::Validation(Json(ErrorResponse {
            error: "validation_error".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    /// Create an Internal error with a custom message
    pub fn internal(message: impl Into<String>) -> Self {
        UserError::Internal(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: message.into(),
            status_code: 500,
        }))
    }
}

impl From<AuthError> for UserError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Forbidden(body) => UserError::Forbidden(body),
            AuthError::InternalError(body) => UserError::Internal(body),
            AuthError::InvalidCredentials(body)
            | AuthError::InvalidToken(body)
            | AuthError::ExpiredToken(body) => UserError::Unauthenticated(body),
        }
    }
}
