mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_register_returns_session(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "email": "  Jane@Example.com ",
            "password": "secret123",
            "full_name": "Jane",
            "user_type": "company"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert!(!body["session_token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["email"], "jane@example.com");
    assert_eq!(body["user"]["user_type"], "employer");
}

#[sqlx::test]
async fn test_register_defaults_to_candidate(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": "a@example.com", "password": "secret123", "full_name": "A" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["user"]["user_type"], "candidate");
}

#[sqlx::test]
async fn test_register_validation(pool: PgPool) {
    let server = common::make_server(pool);

    server
        .post("/api/auth/register")
        .json(&json!({ "email": "a@example.com" }))
        .await
        .assert_status_bad_request();

    server
        .post("/api/auth/register")
        .json(&json!({ "email": "not-an-email", "password": "secret123", "full_name": "A" }))
        .await
        .assert_status_bad_request();

    server
        .post("/api/auth/register")
        .json(&json!({ "email": "a@example.com", "password": "123", "full_name": "A" }))
        .await
        .assert_status_bad_request();

    server
        .post("/api/auth/register")
        .json(&json!({
            "email": "a@example.com", "password": "secret123", "full_name": "A", "user_type": "admin"
        }))
        .await
        .assert_status_bad_request();
}

#[sqlx::test]
async fn test_register_duplicate_email(pool: PgPool) {
    let server = common::make_server(pool);
    common::register(&server, "dup@example.com", "candidate").await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": "DUP@example.com", "password": "secret123", "full_name": "B" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["error"]["code"], "conflict");
}

#[sqlx::test]
async fn test_login_and_me(pool: PgPool) {
    let server = common::make_server(pool);
    let (_, id) = common::register(&server, "me@example.com", "employer").await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "ME@example.com", "password": common::TEST_PASSWORD }))
        .await;
    response.assert_status_ok();
    let token = response.json::<Value>()["session_token"]
        .as_str()
        .unwrap()
        .to_string();

    let me = server
        .get("/api/auth/me")
        .authorization_bearer(&token)
        .await;
    me.assert_status_ok();
    assert_eq!(me.json::<Value>()["user"]["id"], id);

    // Alternative headers carry the same token.
    server
        .get("/api/auth/me")
        .add_header("X-Authorization", format!("Bearer {token}"))
        .await
        .assert_status_ok();
    server
        .get("/api/auth/me")
        .add_header("X-Session-Token", token.clone())
        .await
        .assert_status_ok();
}

#[sqlx::test]
async fn test_login_wrong_password(pool: PgPool) {
    let server = common::make_server(pool);
    common::register(&server, "me@example.com", "candidate").await;

    server
        .post("/api/auth/login")
        .json(&json!({ "email": "me@example.com", "password": "wrong-password" }))
        .await
        .assert_status_unauthorized();

    server
        .post("/api/auth/login")
        .json(&json!({ "email": "nobody@example.com", "password": "whatever" }))
        .await
        .assert_status_unauthorized();
}

#[sqlx::test]
async fn test_logout_invalidates_token(pool: PgPool) {
    let server = common::make_server(pool);
    let (token, _) = common::register(&server, "me@example.com", "candidate").await;

    server
        .post("/api/auth/logout")
        .authorization_bearer(&token)
        .await
        .assert_status_ok();

    server
        .get("/api/auth/me")
        .authorization_bearer(&token)
        .await
        .assert_status_unauthorized();
}

#[sqlx::test]
async fn test_protected_routes_require_token(pool: PgPool) {
    let server = common::make_server(pool);

    for path in ["/api/auth/me", "/api/auth/profile", "/api/favorites", "/api/applications"] {
        server.get(path).await.assert_status_unauthorized();
    }

    server
        .get("/api/auth/me")
        .authorization_bearer("garbage")
        .await
        .assert_status_unauthorized();
}

#[sqlx::test]
async fn test_profile_update_and_password_change(pool: PgPool) {
    let server = common::make_server(pool);
    let (token, _) = common::register(&server, "me@example.com", "candidate").await;

    let response = server
        .put("/api/auth/profile")
        .authorization_bearer(&token)
        .json(&json!({ "full_name": "Renamed" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["profile"]["full_name"], "Renamed");

    // Password change needs the current password.
    server
        .put("/api/auth/profile")
        .authorization_bearer(&token)
        .json(&json!({ "current_password": "bad-guess", "new_password": "newsecret" }))
        .await
        .assert_status_unauthorized();

    server
        .put("/api/auth/profile")
        .authorization_bearer(&token)
        .json(&json!({ "current_password": common::TEST_PASSWORD, "new_password": "newsecret" }))
        .await
        .assert_status_ok();

    server
        .post("/api/auth/login")
        .json(&json!({ "email": "me@example.com", "password": "newsecret" }))
        .await
        .assert_status_ok();

    let profile = server
        .get("/api/auth/profile")
        .authorization_bearer(&token)
        .await;
    profile.assert_status_ok();
    assert_eq!(profile.json::<Value>()["profile"]["email"], "me@example.com");
}

#[sqlx::test]
async fn test_password_change_signs_out_other_sessions(pool: PgPool) {
    let server = common::make_server(pool);
    let (token, _) = common::register(&server, "me@example.com", "candidate").await;

    let second = server
        .post("/api/auth/login")
        .json(&json!({ "email": "me@example.com", "password": common::TEST_PASSWORD }))
        .await
        .json::<Value>()["session_token"]
        .as_str()
        .unwrap()
        .to_string();

    server
        .put("/api/auth/profile")
        .authorization_bearer(&token)
        .json(&json!({ "current_password": common::TEST_PASSWORD, "new_password": "newsecret" }))
        .await
        .assert_status_ok();

    server
        .get("/api/auth/me")
        .authorization_bearer(&second)
        .await
        .assert_status_unauthorized();

    server
        .get("/api/auth/me")
        .authorization_bearer(&token)
        .await
        .assert_status_ok();
}

#[sqlx::test]
async fn test_rotating_signing_secret_keeps_passwords(pool: PgPool) {
    let server = common::make_server(pool.clone());
    let (old_token, _) = common::register(&server, "rot@example.com", "candidate").await;

    let rotated = common::make_server_with_secret(pool, "rotated-secret");

    // Sessions signed with the old secret are gone.
    rotated
        .get("/api/auth/me")
        .authorization_bearer(&old_token)
        .await
        .assert_status_unauthorized();

    let response = rotated
        .post("/api/auth/login")
        .json(&json!({ "email": "rot@example.com", "password": common::TEST_PASSWORD }))
        .await;
    response.assert_status_ok();

    let new_token = response.json::<Value>()["session_token"]
        .as_str()
        .unwrap()
        .to_string();
    rotated
        .get("/api/auth/me")
        .authorization_bearer(&new_token)
        .await
        .assert_status_ok();
}
