//! Credential endpoint integration tests
//!
//! Signup and login against the in-memory store, covering aggregated
//! validation, insert-time uniqueness, and the token contract.

mod common;

use axum::http::StatusCode;
use common::{signup, spawn_app};

#[tokio::test]
async fn test_signup_returns_token_for_created_principal() {
    let app = spawn_app();

    let token = signup(&app.server, "jane_doe", "jane@doe.com").await;
    let principal = app.tokens.verify(&token).unwrap();

    assert_eq!(principal.username, "jane_doe");
}

#[tokio::test]
async fn test_login_issues_token_for_same_principal() {
    let app = spawn_app();

    let signup_token = signup(&app.server, "jane_doe", "jane@doe.com").await;

    let response = app
        .server
        .post("/login")
        .json(&serde_json::json!({
            "username": "jane_doe",
            "password": "Str0ng!Pass1",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    let login_token = body["accessToken"].as_str().unwrap();

    // Both tokens resolve to the same user record.
    assert_eq!(
        app.tokens.verify(&signup_token).unwrap().id,
        app.tokens.verify(login_token).unwrap().id
    );
}

#[tokio::test]
async fn test_signup_aggregates_every_violation() {
    let app = spawn_app();

    let response = app
        .server
        .post("/signup")
        .json(&serde_json::json!({
            "username": "ab",
            "password": "weak",
            "email": "not-an-email",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("Username must be at least 3 characters long"));
    assert!(message.contains("Password must be at least 8 characters long"));
    assert!(message.contains("Email is not valid"));
}

#[tokio::test]
async fn test_signup_empty_body_reports_required_fields() {
    let app = spawn_app();

    let response = app.server.post("/signup").json(&serde_json::json!({})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("Username is required"));
    assert!(message.contains("Password is required"));
    assert!(message.contains("Email is required"));
}

#[tokio::test]
async fn test_signup_duplicate_username_leaves_store_unchanged() {
    let app = spawn_app();
    signup(&app.server, "jane_doe", "jane@doe.com").await;

    let response = app
        .server
        .post("/signup")
        .json(&serde_json::json!({
            "username": "jane_doe",
            "password": "0ther!Pass1",
            "email": "other@doe.com",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Username is already taken");

    // The original credentials still work; the losing signup wrote nothing.
    let login = app
        .server
        .post("/login")
        .json(&serde_json::json!({
            "username": "jane_doe",
            "password": "Str0ng!Pass1",
        }))
        .await;
    assert_eq!(login.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_signup_duplicate_email_is_rejected() {
    let app = spawn_app();
    signup(&app.server, "jane_doe", "jane@doe.com").await;

    let response = app
        .server
        .post("/signup")
        .json(&serde_json::json!({
            "username": "john_doe",
            "password": "Str0ng!Pass1",
            // Email uniqueness is checked on the normalized form.
            "email": "JANE@doe.com",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Email is already registered");
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = spawn_app();

    let response = app
        .server
        .post("/login")
        .json(&serde_json::json!({
            "username": "nobody",
            "password": "Str0ng!Pass1",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = spawn_app();
    signup(&app.server, "jane_doe", "jane@doe.com").await;

    let response = app
        .server
        .post("/login")
        .json(&serde_json::json!({
            "username": "jane_doe",
            "password": "Wr0ng!Pass1",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Password is incorrect");
}
