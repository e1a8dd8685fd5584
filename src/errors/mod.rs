// Errors layer - Error type definitions
pub mod api;
pub mod auth;
pub mod user;

// Re-exports for convenience
pub use api::ApiError;
pub use auth::AuthError;
pub use user::UserError;
