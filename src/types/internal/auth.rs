use serde::{Deserialize, Serialize};

/// JWT Claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user_id)
    pub sub: String,

    /// Email of the authenticated user
    pub email: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Permission identifiers in `module.action` form.
///
/// Endpoints declare exactly one of these; the guard checks it against the
/// permission set of the caller's role.
pub mod permissions {
    pub const CUSTOMERS_READ: &str = "customers.read";
    pub const CUSTOMERS_WRITE: &str = "customers.write";
    pub const AGENTS_READ: &str = "agents.read";
    pub const ORDERS_READ: &str = "orders.read";
    pub const ORDERS_WRITE: &str = "orders.write";
    pub const REPORTS_READ: &str = "reports.read";
    pub const USERS_MANAGE: &str = "users.manage";

    /// Every permission the system knows about, in seeding order.
    pub const ALL: &[&str] = &[
        CUSTOMERS_READ,
        CUSTOMERS_WRITE,
        AGENTS_READ,
        ORDERS_READ,
        ORDERS_WRITE,
        REPORTS_READ,
        USERS_MANAGE,
    ];

    /// Permissions granted to the default "guest" role.
    pub const GUEST: &[&str] = &[CUSTOMERS_READ, AGENTS_READ, ORDERS_READ, REPORTS_READ];
}

/// Role names seeded at startup.
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const GUEST: &str = "guest";
}
