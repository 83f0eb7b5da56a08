#![allow(dead_code)]

use axum_test::TestServer;
use chrono::Duration;
use job_board::application::services::AuthSettings;
use job_board::routes::api_router;
use job_board::server::pg_repositories;
use job_board::state::AppState;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const TEST_PASSWORD: &str = "secret123";

/// Lowest bcrypt cost; keeps registration fast in tests.
pub const TEST_PASSWORD_COST: u32 = 4;

pub fn create_test_state(pool: PgPool) -> AppState {
    create_test_state_with_secret(pool, TEST_SECRET)
}

pub fn create_test_state_with_secret(pool: PgPool, secret: &str) -> AppState {
    AppState::new(
        pg_repositories(Arc::new(pool)),
        AuthSettings::new(secret, Duration::days(30)).with_password_cost(TEST_PASSWORD_COST),
    )
}

/// Full API router (auth included) without rate limiting.
pub fn make_server(pool: PgPool) -> TestServer {
    TestServer::new(api_router(create_test_state(pool))).unwrap()
}

/// Same as [`make_server`], signing session tokens with `secret`.
pub fn make_server_with_secret(pool: PgPool, secret: &str) -> TestServer {
    TestServer::new(api_router(create_test_state_with_secret(pool, secret))).unwrap()
}

/// Registers through the API and returns `(token, user_id)`.
pub async fn register(server: &TestServer, email: &str, user_type: &str) -> (String, i64) {
    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "email": email,
            "password": TEST_PASSWORD,
            "full_name": format!("Test {user_type}"),
            "user_type": user_type,
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<Value>();
    (
        body["session_token"].as_str().unwrap().to_string(),
        body["user"]["id"].as_i64().unwrap(),
    )
}

/// Inserts a user row directly. The password hash is not a valid credential.
pub async fn create_test_user(pool: &PgPool, email: &str, user_type: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (email, password_hash, full_name, user_type)
         VALUES ($1, 'x$y', $2, $3) RETURNING id",
    )
    .bind(email)
    .bind(format!("Name of {email}"))
    .bind(user_type)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_vacancy(pool: &PgPool, employer_id: i64, title: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO vacancies (employer_id, title, company, location, tags)
         VALUES ($1, $2, 'Acme', 'Berlin', ARRAY['rust']) RETURNING id",
    )
    .bind(employer_id)
    .bind(title)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_inactive_vacancy(pool: &PgPool, employer_id: i64, title: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO vacancies (employer_id, title, company, status)
         VALUES ($1, $2, 'Acme', 'inactive') RETURNING id",
    )
    .bind(employer_id)
    .bind(title)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_resume(pool: &PgPool, user_id: i64, is_published: bool) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO resumes (user_id, title, full_name, email, position, phone, is_published)
         VALUES ($1, 'CV', 'Resume Owner', 'owner@example.com', 'Backend', '+100', $2)
         RETURNING id",
    )
    .bind(user_id)
    .bind(is_published)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_application(
    pool: &PgPool,
    vacancy_id: i64,
    applicant_id: i64,
    resume_id: Option<i64>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO applications (vacancy_id, applicant_id, resume_id)
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(vacancy_id)
    .bind(applicant_id)
    .bind(resume_id)
    .fetch_one(pool)
    .await
    .unwrap()
}
