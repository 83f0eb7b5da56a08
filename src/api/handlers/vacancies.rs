//! Handlers for vacancy endpoints.

use axum::{
    Extension, Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{HeaderName, HeaderValue, StatusCode},
};
use validator::Validate;

use crate::api::dto::common::{CreatedResponse, MessageResponse};
use crate::api::dto::pagination::TOTAL_COUNT_HEADER;
use crate::api::dto::vacancy::{VacancyListQuery, VacancyRequest};
use crate::api::middleware::CurrentUser;
use crate::domain::entities::Vacancy;
use crate::error::AppError;
use crate::state::AppState;

/// Lists vacancies, newest first.
///
/// # Endpoint
///
/// `GET /api/vacancies?status=active&employer_id=&q=&location=&page=1&page_size=50`
///
/// Public. Each item carries `employer_name`. The body holds one page; the
/// `X-Total-Count` header holds the number of matches across all pages.
pub async fn vacancy_list_handler(
    State(state): State<AppState>,
    query: Result<Query<VacancyListQuery>, QueryRejection>,
) -> Result<([(HeaderName, HeaderValue); 1], Json<Vec<Vacancy>>), AppError> {
    let Query(query) = query?;
    let page = state.vacancy_service.list(query.into_filter()?).await?;

    Ok((
        [(
            HeaderName::from_static(TOTAL_COUNT_HEADER),
            HeaderValue::from(page.total),
        )],
        Json(page.items),
    ))
}

/// Returns one vacancy and increments its view counter.
///
/// # Endpoint
///
/// `GET /api/vacancies/{id}`
///
/// # Errors
///
/// Returns 404 if the vacancy does not exist.
pub async fn vacancy_get_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vacancy>, AppError> {
    let Path(id) = id?;
    let vacancy = state.vacancy_service.view(id).await?;

    Ok(Json(vacancy))
}

/// Publishes a vacancy.
///
/// # Endpoint
///
/// `POST /api/vacancies` (employers only)
///
/// # Errors
///
/// Returns 400 if title or company is missing, 403 for candidates.
pub async fn create_vacancy_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    payload: Result<Json<VacancyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let id = state
        .vacancy_service
        .create(&user, payload.into_fields()?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(id, "Vacancy created")),
    ))
}

/// Replaces a vacancy owned by the caller.
///
/// # Endpoint
///
/// `PUT /api/vacancies/{id}`
///
/// # Errors
///
/// Returns 403 if the caller does not own the vacancy, 404 if it does not exist.
pub async fn update_vacancy_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<VacancyRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    payload.validate()?;

    state
        .vacancy_service
        .update(&user, id, payload.into_fields()?)
        .await?;

    Ok(Json(MessageResponse::new("Vacancy updated")))
}
