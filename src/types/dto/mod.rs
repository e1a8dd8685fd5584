// DTO layer - request/response models exposed over HTTP
pub mod agent;
pub mod auth;
pub mod common;
pub mod customer;
pub mod order;
pub mod user;
