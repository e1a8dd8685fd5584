// Stores layer - Data access and repository pattern
pub mod agent_store;
pub mod credential_store;
pub mod customer_store;
pub mod order_store;
pub mod role_store;

pub use agent_store::AgentStore;
pub use credential_store::CredentialStore;
pub use customer_store::CustomerStore;
pub use order_store::OrderStore;
pub use role_store::RoleStore;
