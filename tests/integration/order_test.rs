//! Integration tests for the menu and food ordering.

use http::StatusCode;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::helpers;

/// Puts a dish on the menu through the admin endpoint.
async fn add_dish(
    app: &helpers::TestApp,
    admin: &str,
    name: &str,
    price: &str,
    available: bool,
) -> Uuid {
    let response = app
        .request(
            "POST",
            "/api/food-items",
            Some(json!({
                "name": name,
                "price": price,
                "category": "plats",
                "available": available,
            })),
            Some(admin),
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::OK,
        "Creating menu item failed: {:?}",
        response.body
    );
    response.id()
}

#[tokio::test]
async fn test_ordering_requires_authentication() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({ "order_type": "enligne", "items": [] })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_menu_hides_unavailable_items(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let admin = app.signup_admin("chef@plage.example", "vague-bleue").await;
    add_dish(&app, &admin, "Salade niçoise", "12.50", true).await;
    add_dish(&app, &admin, "Plateau de fruits de mer", "45.00", false).await;

    let card = app.request("GET", "/api/food-items", None, None).await;
    assert_eq!(card.status, StatusCode::OK);
    let names: Vec<&str> = card
        .data()
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Salade niçoise"]);

    let full = app
        .request("GET", "/api/food-items/admin/all", None, Some(&admin))
        .await;
    assert_eq!(full.data().as_array().unwrap().len(), 2);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_menu_management_is_staff_only(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;

    let response = app
        .request(
            "POST",
            "/api/food-items",
            Some(json!({ "name": "Tarte tatin", "price": "8.00", "category": "desserts" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "ACCESS_DENIED");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_online_orders_need_an_address(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let admin = app.signup_admin("chef@plage.example", "vague-bleue").await;
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let dish = add_dish(&app, &admin, "Salade niçoise", "12.50", true).await;

    let response = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({
                "order_type": "enligne",
                "items": [{ "food_item_id": dish, "quantity": 1 }],
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error_message().contains("delivery address"));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_order_totals_come_from_the_menu(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let admin = app.signup_admin("chef@plage.example", "vague-bleue").await;
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let salade = add_dish(&app, &admin, "Salade niçoise", "12.50", true).await;
    let tarte = add_dish(&app, &admin, "Tarte tatin", "8.00", true).await;

    // The request carries no prices at all; the server prices each line
    // from the menu.
    let response = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({
                "order_type": "enligne",
                "delivery_address": "12 rue de la Plage, Biarritz",
                "items": [
                    { "food_item_id": salade, "quantity": 2 },
                    { "food_item_id": tarte, "quantity": 1 },
                ],
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["total_price"], "33.00");
    assert_eq!(response.data()["status"], "pending");
    assert_eq!(response.data()["order_type"], "enligne");
    let items = response.data()["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(
        items
            .iter()
            .any(|i| i["unit_price"] == "12.50" && i["quantity"] == 2)
    );

    let mine = app
        .request("GET", "/api/orders/my-orders", None, Some(&token))
        .await;
    assert_eq!(mine.status, StatusCode::OK);
    assert_eq!(mine.data().as_array().unwrap().len(), 1);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_dine_in_orders_need_a_confirmed_reservation(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let admin = app.signup_admin("chef@plage.example", "vague-bleue").await;
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let dish = add_dish(&app, &admin, "Salade niçoise", "12.50", true).await;
    let reservation = app
        .book(&token, "Parasol", "2026-07-01", "12:00", "14:00", 2)
        .await;

    let body = json!({
        "order_type": "sur_place",
        "reservation_id": reservation,
        "items": [{ "food_item_id": dish, "quantity": 1 }],
    });

    // Still pending: not good enough to order against.
    let early = app
        .request("POST", "/api/orders", Some(body.clone()), Some(&token))
        .await;
    assert_eq!(early.status, StatusCode::BAD_REQUEST);
    assert!(early.error_message().contains("confirmed"));

    app.request(
        "POST",
        &format!("/api/reservations/{reservation}/confirm"),
        None,
        Some(&token),
    )
    .await;

    let response = app
        .request("POST", "/api/orders", Some(body), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data()["reservation_id"].as_str().unwrap(),
        reservation.to_string()
    );
    assert!(response.data()["delivery_address"].is_null());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_someone_elses_reservation_does_not_count(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let admin = app.signup_admin("chef@plage.example", "vague-bleue").await;
    let owner = app.signup("marie@plage.example", "sable-chaud").await;
    let other = app.signup("paul@plage.example", "vague-bleue").await;
    let dish = add_dish(&app, &admin, "Salade niçoise", "12.50", true).await;
    let reservation = app
        .book(&owner, "Parasol", "2026-07-01", "12:00", "14:00", 2)
        .await;
    app.request(
        "POST",
        &format!("/api/reservations/{reservation}/confirm"),
        None,
        Some(&owner),
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({
                "order_type": "sur_place",
                "reservation_id": reservation,
                "items": [{ "food_item_id": dish, "quantity": 1 }],
            })),
            Some(&other),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_unknown_and_unavailable_dishes_are_rejected(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let admin = app.signup_admin("chef@plage.example", "vague-bleue").await;
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let off_card = add_dish(&app, &admin, "Plateau royal", "45.00", false).await;

    let unknown = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({
                "order_type": "enligne",
                "delivery_address": "12 rue de la Plage",
                "items": [{ "food_item_id": Uuid::new_v4(), "quantity": 1 }],
            })),
            Some(&token),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::BAD_REQUEST);
    assert!(unknown.error_message().contains("does not exist"));

    let unavailable = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({
                "order_type": "enligne",
                "delivery_address": "12 rue de la Plage",
                "items": [{ "food_item_id": off_card, "quantity": 1 }],
            })),
            Some(&token),
        )
        .await;
    assert_eq!(unavailable.status, StatusCode::BAD_REQUEST);
    assert!(unavailable.error_message().contains("unavailable"));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_kitchen_flow_moves_forward_only(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let admin = app.signup_admin("chef@plage.example", "vague-bleue").await;
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let dish = add_dish(&app, &admin, "Salade niçoise", "12.50", true).await;
    let order = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({
                "order_type": "enligne",
                "delivery_address": "12 rue de la Plage",
                "items": [{ "food_item_id": dish, "quantity": 1 }],
            })),
            Some(&token),
        )
        .await
        .id();

    let path = format!("/api/orders/admin/{order}/status");
    for status in ["confirmed", "ready", "completed"] {
        let response = app
            .request("PUT", &path, Some(json!({ "status": status })), Some(&admin))
            .await;
        assert_eq!(response.status, StatusCode::OK, "Moving to {status} failed");
        assert_eq!(response.data()["status"], status);
    }

    // Completed is terminal.
    let backwards = app
        .request(
            "PUT",
            &path,
            Some(json!({ "status": "confirmed" })),
            Some(&admin),
        )
        .await;
    assert_eq!(backwards.status, StatusCode::CONFLICT);
    assert_eq!(backwards.error_code(), "INVALID_TRANSITION");
    assert!(backwards.error_message().contains("'completed'"));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_kitchen_can_skip_confirmation_but_not_preparation(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let admin = app.signup_admin("chef@plage.example", "vague-bleue").await;
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let dish = add_dish(&app, &admin, "Salade niçoise", "12.50", true).await;
    let order_body = json!({
        "order_type": "enligne",
        "delivery_address": "12 rue de la Plage",
        "items": [{ "food_item_id": dish, "quantity": 1 }],
    });

    // Straight from pending to ready is allowed.
    let first = app
        .request("POST", "/api/orders", Some(order_body.clone()), Some(&token))
        .await
        .id();
    let skipped = app
        .request(
            "PUT",
            &format!("/api/orders/admin/{first}/status"),
            Some(json!({ "status": "ready" })),
            Some(&admin),
        )
        .await;
    assert_eq!(skipped.status, StatusCode::OK);

    // Straight from pending to completed is not.
    let second = app
        .request("POST", "/api/orders", Some(order_body), Some(&token))
        .await
        .id();
    let jumped = app
        .request(
            "PUT",
            &format!("/api/orders/admin/{second}/status"),
            Some(json!({ "status": "completed" })),
            Some(&admin),
        )
        .await;
    assert_eq!(jumped.status, StatusCode::CONFLICT);
    assert!(jumped.error_message().contains("'pending'"));
    assert!(jumped.error_message().contains("'completed'"));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_kitchen_controls_are_staff_only(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let admin = app.signup_admin("chef@plage.example", "vague-bleue").await;
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let dish = add_dish(&app, &admin, "Salade niçoise", "12.50", true).await;
    let order = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({
                "order_type": "enligne",
                "delivery_address": "12 rue de la Plage",
                "items": [{ "food_item_id": dish, "quantity": 1 }],
            })),
            Some(&token),
        )
        .await
        .id();

    let response = app
        .request(
            "PUT",
            &format!("/api/orders/admin/{order}/status"),
            Some(json!({ "status": "confirmed" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_admin_order_list_includes_owner_and_lines(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let admin = app.signup_admin("chef@plage.example", "vague-bleue").await;
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let dish = add_dish(&app, &admin, "Salade niçoise", "12.50", true).await;
    app.request(
        "POST",
        "/api/orders",
        Some(json!({
            "order_type": "enligne",
            "delivery_address": "12 rue de la Plage",
            "items": [{ "food_item_id": dish, "quantity": 3 }],
        })),
        Some(&token),
    )
    .await;

    let forbidden = app
        .request("GET", "/api/orders/admin/all", None, Some(&token))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let response = app
        .request("GET", "/api/orders/admin/all", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let entries = response.data().as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["owner_email"], "marie@plage.example");
    assert_eq!(entries[0]["total_price"], "37.50");
    let items = entries[0]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], 3);
}
