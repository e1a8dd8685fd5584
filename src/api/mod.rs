// API layer - HTTP endpoints
pub mod agents;
pub mod auth;
pub mod customers;
pub mod health;
pub mod orders;
pub mod users;

pub use agents::AgentsApi;
pub use auth::AuthApi;
pub use customers::CustomersApi;
pub use health::HealthApi;
pub use orders::OrdersApi;
pub use users::UsersApi;

use poem_openapi::{auth::Bearer, SecurityScheme};

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(pub Bearer);
