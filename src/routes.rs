//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health` - Health check (public)
//! - `/api/*`       - REST API, see [`crate::api::routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Browser access with custom token headers, preflight handling
//! - **Rate limiting** - Per-IP token bucket, stricter on credential endpoints
//! - **Authentication** - Session token on protected routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, cors, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Router options that come from configuration.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// When `true`, rate limiting reads the client IP from `X-Forwarded-For` /
    /// `X-Real-IP` instead of the peer socket address. Enable only behind a
    /// trusted reverse proxy.
    pub behind_proxy: bool,
    /// Allowed CORS origins; `*` allows any.
    pub cors_allowed_origins: Vec<String>,
}

/// Builds the API router without rate limiting and path normalization.
///
/// Used directly by handler tests, which run without a peer address.
pub fn api_router(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let api_router = Router::new()
        .merge(api::routes::credential_routes())
        .merge(api::routes::public_routes())
        .merge(protected);

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `options` - proxy awareness and CORS origins
pub fn app_router(state: AppState, options: &RouterOptions) -> NormalizePath<Router> {
    let behind_proxy = options.behind_proxy;

    let credentials = api::routes::credential_routes().layer(rate_limit::secure_layer(behind_proxy));

    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::layer(behind_proxy));

    let public = api::routes::public_routes().layer(rate_limit::layer(behind_proxy));

    let api_router = Router::new()
        .merge(credentials)
        .merge(public)
        .merge(protected);

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(cors::layer(&options.cors_allowed_origins))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::AuthSettings;
    use crate::domain::entities::{Session, User, UserType, Vacancy, VacancyStatus};
    use crate::domain::repositories::{
        MockApplicationRepository, MockFavoriteRepository, MockResumeRepository,
        MockSessionRepository, MockUserRepository, MockVacancyRepository,
    };
    use crate::error::AppError;
    use crate::infrastructure::persistence::MockHealthCheck;
    use crate::state::Repositories;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::{Duration, Utc};
    use serde_json::{Value, json};
    use std::sync::Arc;

    struct Mocks {
        sessions: MockSessionRepository,
        vacancies: MockVacancyRepository,
        health: MockHealthCheck,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                sessions: MockSessionRepository::new(),
                vacancies: MockVacancyRepository::new(),
                health: MockHealthCheck::new(),
            }
        }

        fn server(self) -> TestServer {
            let repos = Repositories {
                users: Arc::new(MockUserRepository::new()),
                sessions: Arc::new(self.sessions),
                vacancies: Arc::new(self.vacancies),
                applications: Arc::new(MockApplicationRepository::new()),
                favorites: Arc::new(MockFavoriteRepository::new()),
                resumes: Arc::new(MockResumeRepository::new()),
                health: Arc::new(self.health),
            };
            let state = AppState::new(repos, AuthSettings::new("test-secret", Duration::days(30)));
            TestServer::new(api_router(state)).unwrap()
        }

        /// Any token resolves to a live session of `user`.
        fn signed_in_as(mut self, user: User) -> Self {
            self.sessions.expect_find_with_user().returning(move |hash| {
                let now = Utc::now();
                let session = Session {
                    id: 1,
                    user_id: user.id,
                    token_hash: hash.to_string(),
                    expires_at: now + Duration::days(1),
                    created_at: now,
                };
                Ok(Some((session, user.clone())))
            });
            self
        }
    }

    fn user(id: i64, user_type: UserType) -> User {
        User {
            id,
            email: format!("user{id}@example.com"),
            full_name: format!("User {id}"),
            user_type,
            created_at: Utc::now(),
        }
    }

    fn vacancy(id: i64) -> Vacancy {
        let now = Utc::now();
        Vacancy {
            id,
            employer_id: 2,
            employer_name: "Acme HR".to_string(),
            title: "Rust developer".to_string(),
            company: "Acme".to_string(),
            location: Some("Remote".to_string()),
            salary_min: None,
            salary_max: None,
            employment_type: None,
            experience: None,
            description: None,
            requirements: None,
            tags: vec!["rust".to_string()],
            status: VacancyStatus::Active,
            views_count: 3,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_health_ok() {
        let mut mocks = Mocks::new();
        mocks.health.expect_ping().returning(|| Ok(()));

        let response = mocks.server().get("/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["checks"]["database"]["status"], "ok");
    }

    #[tokio::test]
    async fn test_health_degraded() {
        let mut mocks = Mocks::new();
        mocks
            .health
            .expect_ping()
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        let response = mocks.server().get("/health").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.json::<Value>()["status"], "degraded");
    }

    #[tokio::test]
    async fn test_public_vacancy_list_is_bare_array() {
        let mut mocks = Mocks::new();
        mocks
            .vacancies
            .expect_list()
            .withf(|f| f.status == VacancyStatus::Active && f.offset == 0 && f.limit == 50)
            .returning(|_| Ok(vec![vacancy(1), vacancy(2)]));
        mocks.vacancies.expect_count().returning(|_| Ok(75));

        let response = mocks.server().get("/api/vacancies").await;

        response.assert_status_ok();
        assert_eq!(response.header("x-total-count"), "75");
        let body: Value = response.json();
        assert_eq!(body.as_array().map(Vec::len), Some(2));
        assert_eq!(body[0]["employer_name"], "Acme HR");
    }

    #[tokio::test]
    async fn test_vacancy_path_must_be_numeric() {
        let response = Mocks::new().server().get("/api/vacancies/abc").await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
    }

    #[tokio::test]
    async fn test_protected_route_requires_token() {
        let response = Mocks::new().server().get("/api/auth/me").await;

        response.assert_status_unauthorized();
        assert_eq!(response.json::<Value>()["error"]["code"], "unauthorized");
    }

    #[tokio::test]
    async fn test_unknown_token_is_rejected() {
        let mut mocks = Mocks::new();
        mocks.sessions.expect_find_with_user().returning(|_| Ok(None));

        let response = mocks
            .server()
            .get("/api/auth/me")
            .authorization_bearer("nope")
            .await;

        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_me_with_session_token_header() {
        let server = Mocks::new()
            .signed_in_as(user(7, UserType::Candidate))
            .server();

        let response = server
            .get("/api/auth/me")
            .add_header("X-Session-Token", "tok")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["user"]["id"], 7);
        assert_eq!(body["user"]["user_type"], "candidate");
    }

    #[tokio::test]
    async fn test_candidate_cannot_post_vacancy() {
        let mut mocks = Mocks::new().signed_in_as(user(1, UserType::Candidate));
        mocks.vacancies.expect_create().never();

        let response = mocks
            .server()
            .post("/api/vacancies")
            .authorization_bearer("tok")
            .json(&json!({ "title": "Rust developer", "company": "Acme" }))
            .await;

        response.assert_status_forbidden();
    }

    #[tokio::test]
    async fn test_employer_posts_vacancy() {
        let mut mocks = Mocks::new().signed_in_as(user(2, UserType::Employer));
        mocks
            .vacancies
            .expect_create()
            .withf(|employer_id, f| *employer_id == 2 && f.title == "Rust developer")
            .times(1)
            .returning(|_, _| Ok(11));

        let response = mocks
            .server()
            .post("/api/vacancies")
            .authorization_bearer("tok")
            .json(&json!({ "title": " Rust developer ", "company": "Acme", "tags": ["rust", " "] }))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.json::<Value>()["id"], 11);
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_validation_error() {
        let response = Mocks::new()
            .server()
            .post("/api/auth/login")
            .content_type("application/json")
            .text("{ not json")
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
    }
}
