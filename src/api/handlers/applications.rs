//! Handlers for application endpoints.

use axum::{
    Extension, Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::application::{ApplicationListQuery, ApplyRequest, UpdateStatusRequest};
use crate::api::dto::common::{CreatedResponse, MessageResponse};
use crate::api::middleware::CurrentUser;
use crate::application::services::ApplicationList;
use crate::error::AppError;
use crate::state::AppState;

/// Lists applications visible to the caller.
///
/// # Endpoint
///
/// `GET /api/applications?vacancy_id=`
///
/// Candidates get their own applications with vacancy title, company and
/// salary. Employers get applications to their vacancies with applicant
/// name, email and resume position/phone.
pub async fn application_list_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    query: Result<Query<ApplicationListQuery>, QueryRejection>,
) -> Result<Json<ApplicationList>, AppError> {
    let Query(query) = query?;
    let list = state
        .application_service
        .list(&user, query.vacancy_id)
        .await?;

    Ok(Json(list))
}

/// Applies to a vacancy.
///
/// # Endpoint
///
/// `POST /api/applications` (candidates only)
///
/// # Request Body
///
/// ```json
/// { "vacancy_id": 5, "resume_id": 9, "cover_letter": "..." }
/// ```
///
/// # Errors
///
/// Returns 400 if `vacancy_id` is missing or the vacancy is inactive.
/// Returns 403 for employers or a foreign resume.
/// Returns 404 if the vacancy does not exist.
/// Returns 409 on a repeated application.
pub async fn apply_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    payload: Result<Json<ApplyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let vacancy_id = payload.vacancy_id.ok_or_else(|| {
        AppError::bad_request("vacancy_id is required", json!({ "field": "vacancy_id" }))
    })?;

    let id = state
        .application_service
        .apply(&user, vacancy_id, payload.resume_id, payload.cover_letter)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(id, "Application sent")),
    ))
}

/// Sets the review status of an application.
///
/// # Endpoint
///
/// `PUT /api/applications/{id}` (employer owning the vacancy)
///
/// # Errors
///
/// Returns 400 for an unknown status, 403 for a foreign vacancy, 404 if the
/// application does not exist.
pub async fn update_application_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    state
        .application_service
        .update_status(&user, id, payload.status.trim())
        .await?;

    Ok(Json(MessageResponse::new("Status updated")))
}
