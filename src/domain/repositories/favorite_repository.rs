//! Repository trait for favorites.

use crate::domain::entities::FavoriteVacancy;
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Bookmarked vacancies of a user, most recently bookmarked first.
    async fn list(&self, user_id: i64) -> Result<Vec<FavoriteVacancy>, AppError>;

    /// Bookmarks a vacancy and returns the favorite id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if already bookmarked; the transaction is rolled back.
    async fn add(&self, user_id: i64, vacancy_id: i64) -> Result<i64, AppError>;

    /// Removes a bookmark. Returns `Ok(false)` if there was nothing to remove.
    async fn remove(&self, user_id: i64, vacancy_id: i64) -> Result<bool, AppError>;
}
