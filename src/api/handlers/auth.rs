//! Handlers for registration, login, session and profile endpoints.

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::auth::{
    AuthResponse, LoginRequest, LogoutResponse, MeResponse, ProfileResponse, RegisterRequest,
    UpdateProfileRequest,
};
use crate::api::middleware::{CurrentUser, SessionToken};
use crate::error::AppError;
use crate::state::AppState;

/// Creates an account and logs it in.
///
/// # Endpoint
///
/// `POST /api/auth/register`
///
/// # Request Body
///
/// ```json
/// { "email": "jane@example.com", "password": "secret1", "full_name": "Jane", "user_type": "employer" }
/// ```
///
/// # Errors
///
/// Returns 400 for missing or malformed fields.
/// Returns 409 if the email is already registered.
pub async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let issued = state.auth_service.register(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(issued.into())))
}

/// Exchanges credentials for a session token.
///
/// # Endpoint
///
/// `POST /api/auth/login`
///
/// # Errors
///
/// Returns 400 if email or password is missing.
/// Returns 401 for wrong credentials.
pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let issued = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(issued.into()))
}

/// Returns the caller behind the session token.
///
/// # Endpoint
///
/// `GET /api/auth/me`
pub async fn me_handler(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<MeResponse> {
    Json(MeResponse {
        success: true,
        user: user.into(),
    })
}

/// Ends the current session.
///
/// # Endpoint
///
/// `POST /api/auth/logout`
pub async fn logout_handler(
    State(state): State<AppState>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> Result<Json<LogoutResponse>, AppError> {
    state.auth_service.logout(&token).await?;

    Ok(Json(LogoutResponse {
        success: true,
        message: "Logged out".to_string(),
    }))
}

/// Returns the caller's profile.
///
/// # Endpoint
///
/// `GET /api/auth/profile`
pub async fn profile_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = state.auth_service.profile(user.id).await?;

    Ok(Json(ProfileResponse {
        success: true,
        profile,
    }))
}

/// Updates name, email or password of the caller.
///
/// # Endpoint
///
/// `PUT /api/auth/profile`
///
/// Changing the password signs out every other session; the one making the
/// request stays valid.
///
/// # Errors
///
/// Returns 400 for invalid values, 401 for a wrong current password,
/// 409 if the new email is taken.
pub async fn update_profile_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Extension(SessionToken(token)): Extension<SessionToken>,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Result<Json<ProfileResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let profile = state
        .auth_service
        .update_profile(user.id, &token, payload.into())
        .await?;

    Ok(Json(ProfileResponse {
        success: true,
        profile,
    }))
}
