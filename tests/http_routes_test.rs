mod common;

use common::{auth_harness, seed_sales_data, setup_test_db};
use poem::{http::StatusCode, test::TestClient, Route};
use poem_openapi::OpenApiService;
use sales_backend::api::{AgentsApi, AuthApi, CustomersApi, HealthApi, OrdersApi, UsersApi};
use sales_backend::stores::{AgentStore, CustomerStore, OrderStore};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Build the same route tree as main and wrap it in a test client
fn test_client(db: &DatabaseConnection) -> TestClient<Route> {
    let harness = auth_harness(db);

    let auth_api = AuthApi::new(
        harness.credential_store.clone(),
        harness.token_service.clone(),
        harness.access_control.clone(),
    );
    let users_api = UsersApi::new(
        harness.credential_store.clone(),
        harness.role_store.clone(),
        harness.access_control.clone(),
    );
    let customers_api = CustomersApi::new(
        Arc::new(CustomerStore::new(db.clone())),
        harness.access_control.clone(),
    );
    let agents_api = AgentsApi::new(
        Arc::new(AgentStore::new(db.clone())),
        harness.access_control.clone(),
    );
    let orders_api = OrdersApi::new(
        Arc::new(OrderStore::new(db.clone())),
        harness.access_control.clone(),
    );

    let api_service = OpenApiService::new(
        (
            HealthApi,
            auth_api,
            users_api,
            customers_api,
            agents_api,
            orders_api,
        ),
        "Sales Backend API",
        "1.0.0",
    );

    TestClient::new(Route::new().nest("/", api_service))
}

async fn login(cli: &TestClient<Route>, email: &str, password: &str) -> String {
    let resp = cli
        .post("/auth/login")
        .body_json(&serde_json::json!({ "email": email, "password": password }))
        .send()
        .await;
    resp.assert_status_is_ok();

    let json = resp.json().await;
    json.value()
        .object()
        .get("access_token")
        .string()
        .to_string()
}

#[tokio::test]
async fn health_is_open() {
    let db = setup_test_db().await;
    let cli = test_client(&db);

    let resp = cli.get("/health").send().await;
    resp.assert_status_is_ok();
}

#[tokio::test]
async fn resource_routes_live_at_the_documented_paths() {
    let db = setup_test_db().await;
    seed_sales_data(&db).await;
    let harness = auth_harness(&db);
    harness
        .credential_store
        .create_user("viewer@example.com", "s3cret", None)
        .await
        .expect("registration failed");
    let cli = test_client(&db);

    let token = login(&cli, "viewer@example.com", "s3cret").await;

    for path in ["/customers", "/agents", "/orders"] {
        let resp = cli
            .get(path)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await;
        resp.assert_status_is_ok();
    }

    // the same resources are not mounted anywhere else
    let resp = cli
        .get("/api/customers")
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await;
    resp.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn protected_routes_reject_missing_tokens() {
    let db = setup_test_db().await;
    let cli = test_client(&db);

    for path in ["/customers", "/orders", "/orders/total-amount-by-customer"] {
        let resp = cli.get(path).send().await;
        resp.assert_status(StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn reports_flow_over_http() {
    let db = setup_test_db().await;
    seed_sales_data(&db).await;
    let harness = auth_harness(&db);
    harness
        .credential_store
        .create_user("viewer@example.com", "s3cret", None)
        .await
        .expect("registration failed");
    let cli = test_client(&db);

    let token = login(&cli, "viewer@example.com", "s3cret").await;

    let resp = cli
        .get("/orders/total-amount-by-customer")
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await;
    resp.assert_status_is_ok();

    let json = resp.json().await;
    let rows = json.value().array();
    assert_eq!(rows.len(), 2);

    // guests read reports but cannot write orders
    let resp = cli
        .post("/orders")
        .header("Authorization", format!("Bearer {}", token))
        .body_json(&serde_json::json!({
            "ord_num": "200999",
            "ord_amount": "100",
            "advance_amount": "0",
            "ord_date": "2022-03-27",
            "cust_code": "C1",
            "agent_code": "A001",
        }))
        .send()
        .await;
    resp.assert_status(StatusCode::FORBIDDEN);
}
