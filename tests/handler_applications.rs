mod common;

use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use serde_json::{Value, json};
use sqlx::PgPool;

async fn apply(server: &TestServer, token: &str, body: Value) -> TestResponse {
    server
        .post("/api/applications")
        .authorization_bearer(token)
        .json(&body)
        .await
}

#[sqlx::test]
async fn test_candidate_applies_and_lists(pool: PgPool) {
    let employer = common::create_test_user(&pool, "hr@example.com", "employer").await;
    let vacancy = common::create_test_vacancy(&pool, employer, "Rust developer").await;
    let server = common::make_server(pool);
    let (token, _) = common::register(&server, "dev@example.com", "candidate").await;

    let response = server
        .post("/api/applications")
        .authorization_bearer(&token)
        .json(&json!({ "vacancy_id": vacancy, "cover_letter": "Hire me" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let list: Value = server
        .get("/api/applications")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["vacancy_id"], vacancy);
    assert_eq!(list[0]["title"], "Rust developer");
    assert_eq!(list[0]["status"], "pending");
}

#[sqlx::test]
async fn test_apply_errors(pool: PgPool) {
    let employer = common::create_test_user(&pool, "hr@example.com", "employer").await;
    let stranger = common::create_test_user(&pool, "x@example.com", "candidate").await;
    let vacancy = common::create_test_vacancy(&pool, employer, "Open").await;
    let closed = common::create_inactive_vacancy(&pool, employer, "Closed").await;
    let foreign_resume = common::create_test_resume(&pool, stranger, true).await;
    let server = common::make_server(pool);
    let (token, _) = common::register(&server, "dev@example.com", "candidate").await;
    let (hr_token, _) = common::register(&server, "hr2@example.com", "employer").await;

    apply(&server, &token, json!({}))
        .await
        .assert_status_bad_request();
    apply(&server, &token, json!({ "vacancy_id": 999999 }))
        .await
        .assert_status_not_found();
    apply(&server, &token, json!({ "vacancy_id": closed }))
        .await
        .assert_status_bad_request();
    apply(
        &server,
        &token,
        json!({ "vacancy_id": vacancy, "resume_id": foreign_resume }),
    )
    .await
    .assert_status_forbidden();
    apply(&server, &hr_token, json!({ "vacancy_id": vacancy }))
        .await
        .assert_status_forbidden();

    apply(&server, &token, json!({ "vacancy_id": vacancy }))
        .await
        .assert_status(StatusCode::CREATED);
    apply(&server, &token, json!({ "vacancy_id": vacancy }))
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[sqlx::test]
async fn test_employer_reviews_application(pool: PgPool) {
    let server = common::make_server(pool.clone());
    let (hr_token, hr_id) = common::register(&server, "hr@example.com", "employer").await;
    let (_, candidate_id) = common::register(&server, "dev@example.com", "candidate").await;
    let vacancy = common::create_test_vacancy(&pool, hr_id, "Rust developer").await;
    let resume = common::create_test_resume(&pool, candidate_id, false).await;
    let application =
        common::create_test_application(&pool, vacancy, candidate_id, Some(resume)).await;

    let list: Value = server
        .get("/api/applications")
        .authorization_bearer(&hr_token)
        .add_query_param("vacancy_id", vacancy)
        .await
        .json();
    assert_eq!(list[0]["id"], application);
    assert_eq!(list[0]["email"], "dev@example.com");
    assert_eq!(list[0]["position"], "Backend");

    server
        .put(&format!("/api/applications/{application}"))
        .authorization_bearer(&hr_token)
        .json(&json!({ "status": "accepted" }))
        .await
        .assert_status_ok();

    let status: String = sqlx::query_scalar("SELECT status FROM applications WHERE id = $1")
        .bind(application)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(status, "accepted");

    // The employer can now open the private resume attached to the application.
    server
        .get(&format!("/api/resumes/{resume}"))
        .authorization_bearer(&hr_token)
        .await
        .assert_status_ok();
}

#[sqlx::test]
async fn test_status_update_guards(pool: PgPool) {
    let server = common::make_server(pool.clone());
    let (owner_token, owner_id) = common::register(&server, "hr@example.com", "employer").await;
    let (other_token, _) = common::register(&server, "hr2@example.com", "employer").await;
    let (candidate_token, candidate_id) =
        common::register(&server, "dev@example.com", "candidate").await;
    let vacancy = common::create_test_vacancy(&pool, owner_id, "Job").await;
    let application = common::create_test_application(&pool, vacancy, candidate_id, None).await;
    let path = format!("/api/applications/{application}");

    server
        .put(&path)
        .authorization_bearer(&owner_token)
        .json(&json!({ "status": "viewed" }))
        .await
        .assert_status_bad_request();

    server
        .put(&path)
        .authorization_bearer(&candidate_token)
        .json(&json!({ "status": "accepted" }))
        .await
        .assert_status_forbidden();

    server
        .put(&path)
        .authorization_bearer(&other_token)
        .json(&json!({ "status": "rejected" }))
        .await
        .assert_status_forbidden();

    server
        .put("/api/applications/999999")
        .authorization_bearer(&owner_token)
        .json(&json!({ "status": "rejected" }))
        .await
        .assert_status_not_found();
}
