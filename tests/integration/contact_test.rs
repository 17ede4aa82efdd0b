//! Integration tests for the contact form and the staff inbox.

use http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use crate::helpers;

#[tokio::test]
async fn test_contact_form_requires_the_basics() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/contact-messages",
            Some(json!({ "name": "", "email": "", "message": "" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_contact_form_rejects_a_bad_email() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/contact-messages",
            Some(json!({
                "name": "Marie",
                "email": "nowhere",
                "message": "Est-ce que la plage est ouverte en septembre ?",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error_message().contains("email"));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_anonymous_submission_is_accepted(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);

    let response = app
        .request(
            "POST",
            "/api/contact-messages",
            Some(json!({
                "name": "Marie",
                "email": "marie@plage.example",
                "message": "Est-ce que la plage est ouverte en septembre ?",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "new");
    assert!(response.data()["user_id"].is_null());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_logged_in_submission_links_the_account(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    let response = app
        .request(
            "POST",
            "/api/contact-messages",
            Some(json!({
                "name": "Marie",
                "email": "marie@plage.example",
                "message": "Merci pour la soirée d'hier !",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["user_id"], me.data()["id"]);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_inbox_is_staff_only(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let token = app.signup("marie@plage.example", "sable-chaud").await;
    let admin = app.signup_admin("chef@plage.example", "vague-bleue").await;
    app.request(
        "POST",
        "/api/contact-messages",
        Some(json!({
            "name": "Marie",
            "email": "marie@plage.example",
            "message": "Peut-on privatiser la terrasse ?",
        })),
        None,
    )
    .await;

    let forbidden = app
        .request("GET", "/api/contact-messages/admin/all", None, Some(&token))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let inbox = app
        .request("GET", "/api/contact-messages/admin/all", None, Some(&admin))
        .await;
    assert_eq!(inbox.status, StatusCode::OK);
    let entries = inbox.data().as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "Marie");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_inbox_workflow_statuses(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let admin = app.signup_admin("chef@plage.example", "vague-bleue").await;
    let id = app
        .request(
            "POST",
            "/api/contact-messages",
            Some(json!({
                "name": "Paul",
                "email": "paul@plage.example",
                "message": "Avez-vous des menus végétariens ?",
            })),
            None,
        )
        .await
        .id();

    let path = format!("/api/contact-messages/admin/{id}/status");
    let read = app
        .request("PUT", &path, Some(json!({ "status": "read" })), Some(&admin))
        .await;
    assert_eq!(read.status, StatusCode::OK);
    assert_eq!(read.data()["status"], "read");

    let replied = app
        .request(
            "PUT",
            &path,
            Some(json!({ "status": "replied" })),
            Some(&admin),
        )
        .await;
    assert_eq!(replied.status, StatusCode::OK);
    assert_eq!(replied.data()["status"], "replied");

    let junk = app
        .request("PUT", &path, Some(json!({ "status": "junk" })), Some(&admin))
        .await;
    assert_eq!(junk.status, StatusCode::BAD_REQUEST);
    assert_eq!(junk.error_code(), "VALIDATION_ERROR");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL; set DATABASE_URL and run with --ignored"]
async fn test_inbox_deletion_is_permanent(pool: PgPool) {
    let app = helpers::TestApp::with_pool(pool);
    let admin = app.signup_admin("chef@plage.example", "vague-bleue").await;
    let id = app
        .request(
            "POST",
            "/api/contact-messages",
            Some(json!({
                "name": "Paul",
                "email": "paul@plage.example",
                "message": "Merci de me rappeler.",
            })),
            None,
        )
        .await
        .id();

    let path = format!("/api/contact-messages/admin/{id}");
    let deleted = app.request("DELETE", &path, None, Some(&admin)).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let again = app.request("DELETE", &path, None, Some(&admin)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}
