//! Handlers for resume endpoints.

use axum::{
    Extension, Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::common::SuccessResponse;
use crate::api::dto::resume::{ResumeCreatedResponse, ResumeRequest, ResumeResponse};
use crate::api::middleware::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the caller's most recent resume with experience, education and skills.
///
/// # Endpoint
///
/// `GET /api/resumes`
///
/// # Errors
///
/// Returns 404 if the caller has no resume.
pub async fn my_resume_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<ResumeResponse>, AppError> {
    let resume = state.resume_service.get_mine(&user).await?;

    Ok(Json(ResumeResponse {
        success: true,
        resume,
    }))
}

/// Returns a resume visible to the caller.
///
/// # Endpoint
///
/// `GET /api/resumes/{id}`
pub async fn resume_get_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ResumeResponse>, AppError> {
    let Path(id) = id?;
    let resume = state.resume_service.get(&user, id).await?;

    Ok(Json(ResumeResponse {
        success: true,
        resume,
    }))
}

/// Creates a resume with all its child rows.
///
/// # Endpoint
///
/// `POST /api/resumes`
pub async fn create_resume_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    payload: Result<Json<ResumeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ResumeCreatedResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let resume_id = state.resume_service.create(&user, payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResumeCreatedResponse {
            success: true,
            resume_id,
        }),
    ))
}

/// Replaces a resume owned by the caller.
///
/// # Endpoint
///
/// `PUT /api/resumes/{id}`
///
/// # Errors
///
/// Returns 403 for a foreign resume, 404 if it does not exist.
pub async fn update_resume_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ResumeRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    payload.validate()?;

    state
        .resume_service
        .update(&user, id, payload.into())
        .await?;

    Ok(Json(SuccessResponse::ok()))
}

/// Deletes a resume owned by the caller.
///
/// # Endpoint
///
/// `DELETE /api/resumes/{id}`
pub async fn delete_resume_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SuccessResponse>, AppError> {
    let Path(id) = id?;
    state.resume_service.delete(&user, id).await?;

    Ok(Json(SuccessResponse::ok()))
}
