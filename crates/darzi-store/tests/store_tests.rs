//! Store integration tests against a stub backend.

use darzi_client::{ApiClient, ClientConfig};
use darzi_core::types::{AssignmentCreate, OrderStatus};
use darzi_store::{AppStores, StoreError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn order_json(id: i64, status: &str, assigned_staff: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "customer_id": 1,
        "customer_name": "Rahim Uddin",
        "customer_phone": "01712345678",
        "order_date": "2024-01-05",
        "delivery_date": "2024-01-20",
        "status": status,
        "total_amount": 1300.0,
        "notes": null,
        "created_at": "2024-01-05 10:00:00",
        "items": [],
        "paid_amount": 800.0,
        "remaining_amount": 500.0,
        "assigned_staff": assigned_staff
    })
}

fn assignment_json(staff_id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": staff_id * 10,
        "order_id": 10,
        "staff_id": staff_id,
        "staff_name": "Jamal",
        "staff_role": "tailor",
        "assigned_date": "2024-01-06",
        "notes": null,
        "created_at": "2024-01-06 09:00:00"
    })
}

async fn stores_for(server: &MockServer) -> AppStores {
    let client = ApiClient::new(ClientConfig::new(server.uri())).expect("client should build");
    AppStores::new(client)
}

#[tokio::test]
async fn refresh_loads_orders_into_the_slot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            order_json(10, "pending", serde_json::json!([]))
        ])))
        .mount(&server)
        .await;

    let stores = stores_for(&server).await;
    stores.orders.refresh(None, None).await.unwrap();
    stores.orders.with_orders(|slot| {
        assert!(slot.is_loaded());
        assert_eq!(slot.len(), 1);
        assert_eq!(slot.items()[0].status, OrderStatus::Pending);
    });
}

#[tokio::test]
async fn duplicate_staff_assignment_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            order_json(10, "pending", serde_json::json!([assignment_json(5)]))
        ])))
        .mount(&server)
        .await;
    // No POST mock: if the store sent the request the test would fail
    // on the 404, not on the validation error.

    let stores = stores_for(&server).await;
    stores.orders.refresh(None, None).await.unwrap();

    let err = stores
        .orders
        .assign_staff(
            10,
            AssignmentCreate {
                staff_id: 5,
                assigned_date: None,
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(err.to_string(), "staff '5' already exists");
}

#[tokio::test]
async fn remove_staff_deletes_by_assignment_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            order_json(10, "pending", serde_json::json!([assignment_json(5)]))
        ])))
        .mount(&server)
        .await;
    // The assignment row is id 50 while the staff member is id 5; the
    // delete must travel under the former.
    Mock::given(method("DELETE"))
        .and(path("/api/orders/10/staff/50/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({"message": "Staff assignment removed successfully"}),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/orders/10"))
        .respond_with(ResponseTemplate::new(200)
            .set_body_json(order_json(10, "pending", serde_json::json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let stores = stores_for(&server).await;
    stores.orders.refresh(None, None).await.unwrap();

    let assignment_id = stores
        .orders
        .get(10)
        .unwrap()
        .assigned_staff[0]
        .id;
    assert_eq!(assignment_id, 50);
    stores.orders.remove_staff(10, assignment_id).await.unwrap();

    stores.orders.with_orders(|slot| {
        assert!(slot.items()[0].assigned_staff.is_empty());
    });
}

#[tokio::test]
async fn set_status_refreshes_the_order_in_place() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            order_json(10, "pending", serde_json::json!([]))
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/orders/10/"))
        .respond_with(ResponseTemplate::new(200)
            .set_body_json(order_json(10, "cutting", serde_json::json!([]))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/orders/10"))
        .respond_with(ResponseTemplate::new(200)
            .set_body_json(order_json(10, "cutting", serde_json::json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let stores = stores_for(&server).await;
    stores.orders.refresh(None, None).await.unwrap();
    stores
        .orders
        .set_status(10, OrderStatus::Cutting)
        .await
        .unwrap();

    stores.orders.with_orders(|slot| {
        assert_eq!(slot.items()[0].status, OrderStatus::Cutting);
    });
}

#[tokio::test]
async fn failed_refresh_keeps_previously_loaded_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 1,
                "name": "Rahim Uddin",
                "phone": "01712345678",
                "gender": "male",
                "address": null,
                "notes": null,
                "created_at": "2024-01-05 10:00:00"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let stores = stores_for(&server).await;
    stores.customers.refresh(None).await.unwrap();

    // Backend starts failing; the loaded list must survive.
    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"detail": "database locked"})),
        )
        .mount(&server)
        .await;

    let err = stores.customers.refresh(None).await.unwrap_err();
    assert_eq!(err.to_string(), "database locked");
    stores.customers.with_customers(|slot| {
        assert_eq!(slot.len(), 1);
        assert_eq!(slot.error(), Some("database locked"));
    });
}

#[tokio::test]
async fn assigning_to_an_unloaded_order_fails_fast() {
    let server = MockServer::start().await;
    let stores = stores_for(&server).await;

    let err = stores
        .orders
        .assign_staff(
            42,
            AssignmentCreate {
                staff_id: 5,
                assigned_date: None,
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Core(_)));
    assert_eq!(err.to_string(), "Order not found: 42");
}

#[tokio::test]
async fn customer_detail_requires_a_loaded_customer() {
    let server = MockServer::start().await;
    let stores = stores_for(&server).await;

    let err = stores.customer_detail(7).unwrap_err();
    assert_eq!(err.to_string(), "Customer not found: 7");
}

#[tokio::test]
async fn dashboard_view_reads_straight_from_the_slots() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            order_json(10, "pending", serde_json::json!([]))
        ])))
        .mount(&server)
        .await;

    let stores = stores_for(&server).await;
    stores.orders.refresh(None, None).await.unwrap();

    let today = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let view = stores.dashboard(today);
    assert_eq!(view.order_count, 1);
    assert_eq!(view.status.pending, 1);
    assert_eq!(view.outstanding, darzi_core::Money::from_major_minor(500, 0));
    // Customers and payments were never fetched; the view degrades to
    // empty instead of failing.
    assert_eq!(view.customer_count, 0);
    assert!(view.total_revenue.is_zero());
}
