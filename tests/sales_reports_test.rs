mod common;

use common::{auth_harness, seed_sales_data, setup_test_db};
use sales_backend::stores::OrderStore;
use sales_backend::types::internal::auth::permissions;
use sales_backend::types::internal::money::format_amount;

#[tokio::test]
async fn totals_by_customer_match_the_seeded_orders() {
    let db = setup_test_db().await;
    seed_sales_data(&db).await;

    let orders = OrderStore::new(db);
    let mut rows = orders
        .total_amount_by_customer()
        .await
        .expect("aggregate failed");
    rows.sort_by(|a, b| a.cust_code.cmp(&b.cust_code));

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].cust_code, "C1");
    assert_eq!(format_amount(rows[0].total_ord_amount), "3800.00");
    assert_eq!(rows[1].cust_code, "C2");
    assert_eq!(format_amount(rows[1].total_ord_amount), "500.00");
}

#[tokio::test]
async fn totals_by_agent_and_country_agree_with_customer_totals() {
    let db = setup_test_db().await;
    seed_sales_data(&db).await;

    let orders = OrderStore::new(db);

    let by_agent = orders.total_amount_by_agent().await.expect("agent aggregate");
    let by_country = orders
        .total_amount_by_country()
        .await
        .expect("country aggregate");

    // Every grouping sums the same three orders
    let agent_sum: i64 = by_agent.iter().map(|r| r.total_ord_amount).sum();
    let country_sum: i64 = by_country.iter().map(|r| r.total_ord_amount).sum();
    assert_eq!(agent_sum, 430_000);
    assert_eq!(country_sum, 430_000);

    let usa = by_country
        .iter()
        .find(|r| r.cust_country == "USA")
        .expect("USA row missing");
    assert_eq!(usa.total_ord_amount, 380_000);
}

#[tokio::test]
async fn empty_order_table_yields_empty_reports() {
    let db = setup_test_db().await;
    seed_sales_data(&db).await;

    let orders = OrderStore::new(db);
    for num in ["200101", "200102", "200103"] {
        orders.delete(num).await.expect("delete failed");
    }

    assert!(orders.total_amount_by_customer().await.unwrap().is_empty());
    assert!(orders.total_amount_by_agent().await.unwrap().is_empty());
    assert!(orders.total_amount_by_country().await.unwrap().is_empty());
}

#[tokio::test]
async fn guest_role_can_read_reports_but_not_write_orders() {
    let db = setup_test_db().await;
    seed_sales_data(&db).await;
    let harness = auth_harness(&db);

    let user = harness
        .credential_store
        .create_user("viewer@example.com", "s3cret", None)
        .await
        .expect("registration failed");
    let token = harness
        .token_service
        .issue(&user.id, &user.email)
        .expect("token issuance failed");

    harness
        .access_control
        .require(&token, permissions::REPORTS_READ)
        .await
        .expect("guest should read reports");

    let denied = harness
        .access_control
        .require(&token, permissions::ORDERS_WRITE)
        .await;
    assert!(denied.is_err());
}
