//! Integration tests for booking, availability, and the reservation
//! lifecycle.

use http::StatusCode;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::helpers;

#[tokio::test]
async fn test_table_types_lists_the_catalog() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/reservations/table-types", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let types = response.data().as_array().unwrap();
    let names: Vec<&str> = types.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Parasol", "Mini Cabane", "Cabane"]);
    assert_eq!(types[0]["price_per_hour"], "15.00");
    assert_eq!(types[2]["min_capacity"], 6);
}

#[tokio::test]
async fn test_booking_requires_authentication() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/reservations",
            Some(json!({
                "table_type": "Parasol",
                "reservation_date": "2026-07-01",
                "start_time": "12:00",
                "end_time": "14:00",
                "num_people": 2,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_booking_prices_by_duration(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;

    let response = app
        .request(
            "POST",
            "/api/reservations",
            Some(json!({
                "table_type": "Parasol",
                "reservation_date": "2026-07-01",
                "start_time": "12:00",
                "end_time": "14:00",
                "num_people": 3,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    // Two hours of Parasol at 15.00/h.
    assert_eq!(response.data()["total_price"], "30.00");
    assert_eq!(response.data()["status"], "pending");
    assert_eq!(response.data()["table_type"], "Parasol");
    assert_eq!(response.data()["start_time"], "12:00:00");
    assert_eq!(response.data()["num_people"], 3);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_overlapping_slot_is_refused(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    app.book(&token, "Parasol", "2026-07-01", "12:00", "14:00", 2)
        .await;

    let other = app.signup("paul@plage.example", "vague-bleue").await;
    let response = app
        .request(
            "POST",
            "/api/reservations",
            Some(json!({
                "table_type": "Parasol",
                "reservation_date": "2026-07-01",
                "start_time": "13:00",
                "end_time": "15:00",
                "num_people": 2,
            })),
            Some(&other),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "CONFLICT");
    // The reply names the booking that is in the way.
    assert!(response.error_message().contains("12:00"));
    assert!(response.error_message().contains("14:00"));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_touching_slots_share_an_edge(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    app.book(&token, "Parasol", "2026-07-01", "12:00", "14:00", 2)
        .await;

    // One booking ends exactly where the next one starts.
    let other = app.signup("paul@plage.example", "vague-bleue").await;
    app.book(&other, "Parasol", "2026-07-01", "14:00", "16:00", 2)
        .await;
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_other_table_types_are_not_blocked(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    app.book(&token, "Parasol", "2026-07-01", "12:00", "14:00", 2)
        .await;

    let other = app.signup("paul@plage.example", "vague-bleue").await;
    app.book(&other, "Mini Cabane", "2026-07-01", "12:00", "14:00", 2)
        .await;
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_cancelled_slot_can_be_rebooked(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let id = app
        .book(&token, "Parasol", "2026-07-01", "12:00", "14:00", 2)
        .await;

    let cancelled = app
        .request(
            "POST",
            &format!("/api/reservations/{id}/cancel"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(cancelled.status, StatusCode::OK);
    assert_eq!(cancelled.data()["status"], "cancelled");

    // The window is free again, even for someone else.
    let other = app.signup("paul@plage.example", "vague-bleue").await;
    app.book(&other, "Parasol", "2026-07-01", "12:00", "14:00", 2)
        .await;
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_party_size_must_fit_the_table(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;

    let response = app
        .request(
            "POST",
            "/api/reservations",
            Some(json!({
                "table_type": "Parasol",
                "reservation_date": "2026-07-01",
                "start_time": "12:00",
                "end_time": "14:00",
                "num_people": 6,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error_message().contains("between 1 and 4"));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_fractional_cents_round_up(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;

    // 90 minutes of Mini Cabane at 25.00/h is exactly 37.50.
    let exact = app
        .request(
            "POST",
            "/api/reservations",
            Some(json!({
                "table_type": "Mini Cabane",
                "reservation_date": "2026-07-01",
                "start_time": "10:00",
                "end_time": "11:30",
                "num_people": 4,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(exact.status, StatusCode::OK);
    assert_eq!(exact.data()["total_price"], "37.50");

    // 25 minutes of Cabane at 35.00/h is 14.5833.., charged as 14.59.
    let rounded = app
        .request(
            "POST",
            "/api/reservations",
            Some(json!({
                "table_type": "Cabane",
                "reservation_date": "2026-07-01",
                "start_time": "12:00",
                "end_time": "12:25",
                "num_people": 8,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(rounded.status, StatusCode::OK);
    assert_eq!(rounded.data()["total_price"], "14.59");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_confirm_then_accept_settles_a_booking(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let admin = app.signup_admin("chef@plage.example", "vague-bleue").await;
    let id = app
        .book(&token, "Parasol", "2026-07-01", "12:00", "14:00", 2)
        .await;

    let confirmed = app
        .request(
            "POST",
            &format!("/api/reservations/{id}/confirm"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(confirmed.status, StatusCode::OK);
    assert_eq!(confirmed.data()["status"], "confirmed");

    let accepted = app
        .request(
            "PUT",
            &format!("/api/reservations/{id}"),
            Some(json!({ "status": "accepted" })),
            Some(&admin),
        )
        .await;
    assert_eq!(accepted.status, StatusCode::OK);
    assert_eq!(accepted.data()["status"], "accepted");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_accepting_a_pending_booking_is_refused(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let admin = app.signup_admin("chef@plage.example", "vague-bleue").await;
    let id = app
        .book(&token, "Parasol", "2026-07-01", "12:00", "14:00", 2)
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/reservations/{id}"),
            Some(json!({ "status": "accepted" })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "INVALID_TRANSITION");
    assert!(response.error_message().contains("'pending'"));
    assert!(response.error_message().contains("'accepted'"));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_decisions_are_admin_only(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let id = app
        .book(&token, "Parasol", "2026-07-01", "12:00", "14:00", 2)
        .await;
    app.request(
        "POST",
        &format!("/api/reservations/{id}/confirm"),
        None,
        Some(&token),
    )
    .await;

    // The owner cannot settle their own booking.
    let response = app
        .request(
            "PUT",
            &format!("/api/reservations/{id}"),
            Some(json!({ "status": "denied" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "ACCESS_DENIED");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_only_decision_statuses_pass_through_updates(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let admin = app.signup_admin("chef@plage.example", "vague-bleue").await;
    let id = app
        .book(&token, "Parasol", "2026-07-01", "12:00", "14:00", 2)
        .await;

    // Cancellation goes through its own endpoint, not the update body.
    let response = app
        .request(
            "PUT",
            &format!("/api/reservations/{id}"),
            Some(json!({ "status": "cancelled" })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_cancelling_twice_is_refused(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let id = app
        .book(&token, "Parasol", "2026-07-01", "12:00", "14:00", 2)
        .await;

    let first = app
        .request(
            "POST",
            &format!("/api/reservations/{id}/cancel"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .request(
            "POST",
            &format!("/api/reservations/{id}/cancel"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert!(second.error_message().contains("already cancelled"));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_confirmed_bookings_are_locked_for_owners(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let admin = app.signup_admin("chef@plage.example", "vague-bleue").await;
    let id = app
        .book(&token, "Parasol", "2026-07-01", "12:00", "14:00", 2)
        .await;
    app.request(
        "POST",
        &format!("/api/reservations/{id}/confirm"),
        None,
        Some(&token),
    )
    .await;

    // Once confirmed, only staff can cancel.
    let by_owner = app
        .request(
            "POST",
            &format!("/api/reservations/{id}/cancel"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(by_owner.status, StatusCode::FORBIDDEN);

    let by_admin = app
        .request(
            "POST",
            &format!("/api/reservations/{id}/cancel"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(by_admin.status, StatusCode::OK);
    assert_eq!(by_admin.data()["status"], "cancelled");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_strangers_cannot_see_or_touch_a_booking(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let stranger = app.signup("paul@plage.example", "vague-bleue").await;
    let id = app
        .book(&token, "Parasol", "2026-07-01", "12:00", "14:00", 2)
        .await;

    let path = format!("/api/reservations/{id}");
    let get = app.request("GET", &path, None, Some(&stranger)).await;
    assert_eq!(get.status, StatusCode::FORBIDDEN);

    let put = app
        .request(
            "PUT",
            &path,
            Some(json!({ "num_people": 4 })),
            Some(&stranger),
        )
        .await;
    assert_eq!(put.status, StatusCode::FORBIDDEN);

    let cancel = app
        .request("POST", &format!("{path}/cancel"), None, Some(&stranger))
        .await;
    assert_eq!(cancel.status, StatusCode::FORBIDDEN);
    assert_eq!(cancel.error_code(), "ACCESS_DENIED");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_missing_booking_is_not_found(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;

    let response = app
        .request(
            "GET",
            &format!("/api/reservations/{}", Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_review_list_shows_confirmed_and_settled_only(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let admin = app.signup_admin("chef@plage.example", "vague-bleue").await;

    let pending = app
        .book(&token, "Parasol", "2026-07-01", "10:00", "11:00", 2)
        .await;
    let confirmed = app
        .book(&token, "Parasol", "2026-07-01", "12:00", "13:00", 2)
        .await;
    let accepted = app
        .book(&token, "Parasol", "2026-07-01", "14:00", "15:00", 2)
        .await;
    for id in [confirmed, accepted] {
        app.request(
            "POST",
            &format!("/api/reservations/{id}/confirm"),
            None,
            Some(&token),
        )
        .await;
    }
    app.request(
        "PUT",
        &format!("/api/reservations/{accepted}"),
        Some(json!({ "status": "accepted" })),
        Some(&admin),
    )
    .await;

    let forbidden = app
        .request("GET", "/api/reservations/admin/all", None, Some(&token))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let review = app
        .request("GET", "/api/reservations/admin/all", None, Some(&admin))
        .await;
    assert_eq!(review.status, StatusCode::OK);
    let entries = review.data().as_array().unwrap();
    let ids: Vec<String> = entries
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect();
    assert!(!ids.contains(&pending.to_string()));
    assert!(ids.contains(&confirmed.to_string()));
    assert!(ids.contains(&accepted.to_string()));
    // The staff screen shows who booked, without another lookup.
    assert_eq!(entries[0]["owner_email"], "marie@plage.example");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_edits_reprice_and_recheck_availability(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let id = app
        .book(&token, "Parasol", "2026-07-01", "12:00", "14:00", 2)
        .await;

    // Stretching the window to three hours reprices it.
    let stretched = app
        .request(
            "PUT",
            &format!("/api/reservations/{id}"),
            Some(json!({ "end_time": "15:00" })),
            Some(&token),
        )
        .await;
    assert_eq!(stretched.status, StatusCode::OK);
    assert_eq!(stretched.data()["total_price"], "45.00");

    // Moving onto someone else's slot is refused.
    let other = app.signup("paul@plage.example", "vague-bleue").await;
    app.book(&other, "Parasol", "2026-07-01", "16:00", "17:00", 2)
        .await;
    let clashing = app
        .request(
            "PUT",
            &format!("/api/reservations/{id}"),
            Some(json!({ "start_time": "16:30", "end_time": "17:30" })),
            Some(&token),
        )
        .await;
    assert_eq!(clashing.status, StatusCode::CONFLICT);

    // An edit that keeps the current window does not collide with the
    // reservation itself.
    let unchanged = app
        .request(
            "PUT",
            &format!("/api/reservations/{id}"),
            Some(json!({ "num_people": 4 })),
            Some(&token),
        )
        .await;
    assert_eq!(unchanged.status, StatusCode::OK);
    assert_eq!(unchanged.data()["num_people"], 4);
    assert_eq!(unchanged.data()["total_price"], "45.00");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_delete_is_an_admin_cancellation(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let admin = app.signup_admin("chef@plage.example", "vague-bleue").await;
    let id = app
        .book(&token, "Parasol", "2026-07-01", "12:00", "14:00", 2)
        .await;

    let path = format!("/api/reservations/{id}");
    let by_owner = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(by_owner.status, StatusCode::FORBIDDEN);

    let by_admin = app.request("DELETE", &path, None, Some(&admin)).await;
    assert_eq!(by_admin.status, StatusCode::OK);

    // Nothing is erased; the booking is kept as a cancelled record.
    let after = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(after.status, StatusCode::OK);
    assert_eq!(after.data()["status"], "cancelled");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_my_reservations_lists_only_mine(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let other = app.signup("paul@plage.example", "vague-bleue").await;

    app.book(&token, "Parasol", "2026-07-01", "10:00", "11:00", 2)
        .await;
    app.book(&token, "Parasol", "2026-07-02", "10:00", "11:00", 2)
        .await;
    app.book(&other, "Parasol", "2026-07-03", "10:00", "11:00", 2)
        .await;

    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    let my_id = me.data()["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "GET",
            "/api/reservations/my-reservations",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let entries = response.data().as_array().unwrap();
    assert_eq!(entries.len(), 2);
    for entry in entries {
        assert_eq!(entry["user_id"].as_str().unwrap(), my_id);
    }
}
