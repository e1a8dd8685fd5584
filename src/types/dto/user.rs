use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Request model for user registration
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Email for the new account (unique)
    pub email: String,

    /// Plaintext password, hashed before persistence
    pub password: String,
}

/// Response model describing a user account
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID (UUID)
    pub id: String,

    /// Account email
    pub email: String,

    /// Name of the user's current role
    pub role: String,
}

/// Request model for reassigning a user's role
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    /// Name of the role to assign (replaces the current role)
    pub role_name: String,
}

/// Response model describing a role
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RoleResponse {
    /// Role name
    pub name: String,

    /// Permissions granted by the role
    pub permissions: Vec<String>,
}
