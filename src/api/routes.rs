//! API route configuration.
//!
//! Routes are split by access level so that [`crate::routes::app_router`] can
//! put session authentication and rate limiting on each group.

use crate::api::handlers::{
    add_favorite_handler, application_list_handler, apply_handler, create_resume_handler,
    create_vacancy_handler, delete_resume_handler, favorite_list_handler, login_handler,
    logout_handler, me_handler, my_resume_handler, profile_handler, register_handler,
    remove_favorite_by_query_handler, remove_favorite_handler, resume_get_handler,
    update_application_handler, update_profile_handler, update_resume_handler,
    update_vacancy_handler, vacancy_get_handler, vacancy_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Credential endpoints: no session required, stricter rate limit.
///
/// - `POST /auth/register` - Create an account and a session
/// - `POST /auth/login`    - Open a session
pub fn credential_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
}

/// Public read-only endpoints.
///
/// - `GET /vacancies`      - List vacancies
/// - `GET /vacancies/{id}` - Vacancy details (counts a view)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/vacancies", get(vacancy_list_handler))
        .route("/vacancies/{id}", get(vacancy_get_handler))
}

/// Endpoints that require a session token.
///
/// - `GET    /auth/me`                  - Current user
/// - `POST   /auth/logout`              - End the session
/// - `GET    /auth/profile`             - Profile
/// - `PUT    /auth/profile`             - Update profile / password
/// - `POST   /vacancies`                - Publish a vacancy (employer)
/// - `PUT    /vacancies/{id}`           - Replace a vacancy (owner)
/// - `GET    /resumes`                  - Own latest resume
/// - `POST   /resumes`                  - Create a resume
/// - `GET    /resumes/{id}`             - Resume visible to the caller
/// - `PUT    /resumes/{id}`             - Replace a resume (owner)
/// - `DELETE /resumes/{id}`             - Delete a resume (owner)
/// - `GET    /applications`             - Applications visible to the caller
/// - `POST   /applications`             - Apply (candidate)
/// - `PUT    /applications/{id}`        - Review (employer)
/// - `GET    /favorites`                - Bookmarks
/// - `POST   /favorites`                - Add bookmark
/// - `DELETE /favorites?vacancy_id=`    - Remove bookmark
/// - `DELETE /favorites/{vacancy_id}`   - Remove bookmark
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(me_handler))
        .route("/auth/logout", post(logout_handler))
        .route(
            "/auth/profile",
            get(profile_handler).put(update_profile_handler),
        )
        .route("/vacancies", post(create_vacancy_handler))
        .route("/vacancies/{id}", put(update_vacancy_handler))
        .route(
            "/resumes",
            get(my_resume_handler).post(create_resume_handler),
        )
        .route(
            "/resumes/{id}",
            get(resume_get_handler)
                .put(update_resume_handler)
                .delete(delete_resume_handler),
        )
        .route(
            "/applications",
            get(application_list_handler).post(apply_handler),
        )
        .route("/applications/{id}", put(update_application_handler))
        .route(
            "/favorites",
            get(favorite_list_handler)
                .post(add_favorite_handler)
                .delete(remove_favorite_by_query_handler),
        )
        .route("/favorites/{vacancy_id}", delete(remove_favorite_handler))
}
