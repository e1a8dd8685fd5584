use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Standard JSON error body returned by every failing endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Response model for delete endpoints
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Number of rows removed
    pub affected: u64,
}

/// Generic success message
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Success message
    pub message: String,
}

/// Response model for the health check endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Current server time (RFC 3339)
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_serializes_with_the_documented_keys() {
        let body = ErrorResponse {
            error: "not_found".to_string(),
            message: "No customer with key 'C9'".to_string(),
            status_code: 404,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "error": "not_found",
                "message": "No customer with key 'C9'",
                "status_code": 404,
            })
        );
    }
}
