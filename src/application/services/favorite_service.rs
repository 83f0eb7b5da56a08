//! Bookmarked vacancies.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::FavoriteVacancy;
use crate::domain::repositories::{FavoriteRepository, VacancyRepository};
use crate::error::AppError;

/// Service for a user's favorite vacancies. Any authenticated role may use it.
pub struct FavoriteService<F: FavoriteRepository + ?Sized, V: VacancyRepository + ?Sized> {
    favorites: Arc<F>,
    vacancies: Arc<V>,
}

impl<F: FavoriteRepository + ?Sized, V: VacancyRepository + ?Sized> FavoriteService<F, V> {
    pub fn new(favorites: Arc<F>, vacancies: Arc<V>) -> Self {
        Self {
            favorites,
            vacancies,
        }
    }

    pub async fn list(&self, user_id: i64) -> Result<Vec<FavoriteVacancy>, AppError> {
        self.favorites.list(user_id).await
    }

    /// Bookmarks a vacancy.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the vacancy does not exist.
    /// Returns [`AppError::Conflict`] if it is already bookmarked.
    pub async fn add(&self, user_id: i64, vacancy_id: i64) -> Result<i64, AppError> {
        if self.vacancies.find_by_id(vacancy_id).await?.is_none() {
            return Err(AppError::not_found(
                "Vacancy not found",
                json!({ "vacancy_id": vacancy_id }),
            ));
        }

        let id = self.favorites.add(user_id, vacancy_id).await?;
        tracing::debug!(user_id, vacancy_id, "Favorite added");
        Ok(id)
    }

    /// Removes a bookmark. Removing a missing bookmark is not an error.
    pub async fn remove(&self, user_id: i64, vacancy_id: i64) -> Result<(), AppError> {
        let removed = self.favorites.remove(user_id, vacancy_id).await?;
        tracing::debug!(user_id, vacancy_id, removed, "Favorite removed");
        Ok(())
    }
}
