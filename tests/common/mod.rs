// Common test utilities for integration tests

use migration::{Migrator, MigratorTrait};
use sales_backend::services::{AccessControl, TokenService};
use sales_backend::stores::{AgentStore, CredentialStore, CustomerStore, OrderStore, RoleStore};
use sales_backend::types::db::{agent, customer, order};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

pub const TEST_JWT_SECRET: &str = "test-secret-key-minimum-32-characters-long";

/// Creates a test database with migrations applied and default roles seeded
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    RoleStore::new(db.clone())
        .seed_defaults()
        .await
        .expect("Failed to seed roles");

    db
}

/// Everything the auth flow needs, wired the same way as in main
pub struct AuthHarness {
    pub credential_store: Arc<CredentialStore>,
    pub token_service: Arc<TokenService>,
    pub access_control: Arc<AccessControl>,
    pub role_store: Arc<RoleStore>,
}

pub fn auth_harness(db: &DatabaseConnection) -> AuthHarness {
    let credential_store = Arc::new(CredentialStore::new(db.clone()));
    let token_service = Arc::new(TokenService::new(TEST_JWT_SECRET.to_string(), 24));
    let access_control = Arc::new(AccessControl::new(
        credential_store.clone(),
        token_service.clone(),
    ));
    let role_store = Arc::new(RoleStore::new(db.clone()));

    AuthHarness {
        credential_store,
        token_service,
        access_control,
        role_store,
    }
}

pub fn agent_fixture(code: &str) -> agent::Model {
    agent::Model {
        agent_code: code.to_string(),
        agent_name: format!("Agent {}", code),
        working_area: Some("Bangalore".to_string()),
        commission: Some("0.15".to_string()),
        phone_no: None,
        country: None,
    }
}

pub fn customer_fixture(code: &str, country: &str, agent_code: &str) -> customer::Model {
    customer::Model {
        cust_code: code.to_string(),
        cust_name: format!("Customer {}", code),
        cust_city: Some("New York".to_string()),
        working_area: None,
        cust_country: country.to_string(),
        grade: Some(2),
        opening_amt: 300_000,
        receive_amt: 500_000,
        payment_amt: 200_000,
        outstanding_amt: 600_000,
        phone_no: None,
        agent_code: agent_code.to_string(),
    }
}

pub fn order_fixture(num: &str, amount_cents: i64, cust: &str, agent: &str) -> order::Model {
    order::Model {
        ord_num: num.to_string(),
        ord_amount: amount_cents,
        advance_amount: 0,
        ord_date: "2022-03-27".to_string(),
        cust_code: cust.to_string(),
        agent_code: agent.to_string(),
        ord_description: Some("SOD".to_string()),
    }
}

/// Seed two agents, two customers in different countries and three orders
pub async fn seed_sales_data(db: &DatabaseConnection) {
    let agents = AgentStore::new(db.clone());
    let customers = CustomerStore::new(db.clone());
    let orders = OrderStore::new(db.clone());

    agents
        .create(agent_fixture("A001"))
        .await
        .expect("Failed to seed agent A001");
    agents
        .create(agent_fixture("A002"))
        .await
        .expect("Failed to seed agent A002");

    customers
        .create(customer_fixture("C1", "USA", "A001"))
        .await
        .expect("Failed to seed customer C1");
    customers
        .create(customer_fixture("C2", "Australia", "A002"))
        .await
        .expect("Failed to seed customer C2");

    orders
        .create(order_fixture("200101", 300_000, "C1", "A001"))
        .await
        .expect("Failed to seed order 200101");
    orders
        .create(order_fixture("200102", 80_000, "C1", "A001"))
        .await
        .expect("Failed to seed order 200102");
    orders
        .create(order_fixture("200103", 50_000, "C2", "A002"))
        .await
        .expect("Failed to seed order 200103");
}
