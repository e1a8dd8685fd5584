// Database entities (sea-orm models)
pub mod agent;
pub mod customer;
pub mod order;
pub mod permission;
pub mod role;
pub mod role_permission;
pub mod user;
