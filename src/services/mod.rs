// Services layer - Business logic and orchestration
pub mod access_control;
pub mod password;
pub mod token_service;

pub use access_control::{AccessControl, AuthenticatedUser};
pub use token_service::TokenService;
