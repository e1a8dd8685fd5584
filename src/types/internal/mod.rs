// Internal types - not exposed over the wire
pub mod auth;
pub mod money;
