//! Handlers for favorite endpoints.

use axum::{
    Extension, Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::common::{CreatedResponse, MessageResponse};
use crate::api::dto::favorite::{AddFavoriteRequest, FavoriteQuery};
use crate::api::middleware::CurrentUser;
use crate::domain::entities::FavoriteVacancy;
use crate::error::AppError;
use crate::state::AppState;

fn vacancy_id_required() -> AppError {
    AppError::bad_request("vacancy_id is required", json!({ "field": "vacancy_id" }))
}

/// Lists the caller's bookmarked vacancies, most recent first.
///
/// # Endpoint
///
/// `GET /api/favorites`
pub async fn favorite_list_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<FavoriteVacancy>>, AppError> {
    let favorites = state.favorite_service.list(user.id).await?;

    Ok(Json(favorites))
}

/// Bookmarks a vacancy.
///
/// # Endpoint
///
/// `POST /api/favorites` with `{ "vacancy_id": 5 }`
///
/// # Errors
///
/// Returns 404 for an unknown vacancy, 409 if already bookmarked.
pub async fn add_favorite_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    payload: Result<Json<AddFavoriteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let Json(payload) = payload?;
    let vacancy_id = payload.vacancy_id.ok_or_else(vacancy_id_required)?;

    let id = state.favorite_service.add(user.id, vacancy_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(id, "Added to favorites")),
    ))
}

/// Removes a bookmark.
///
/// # Endpoint
///
/// `DELETE /api/favorites/{vacancy_id}`
///
/// Idempotent: removing a missing bookmark still returns 200.
pub async fn remove_favorite_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    vacancy_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(vacancy_id) = vacancy_id?;
    state.favorite_service.remove(user.id, vacancy_id).await?;

    Ok(Json(MessageResponse::new("Removed from favorites")))
}

/// Query-string form of [`remove_favorite_handler`].
///
/// # Endpoint
///
/// `DELETE /api/favorites?vacancy_id=5`
pub async fn remove_favorite_by_query_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    query: Result<Query<FavoriteQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Query(query) = query?;
    let vacancy_id = query.vacancy_id.ok_or_else(vacancy_id_required)?;

    state.favorite_service.remove(user.id, vacancy_id).await?;

    Ok(Json(MessageResponse::new("Removed from favorites")))
}
