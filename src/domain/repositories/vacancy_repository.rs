//! Repository trait for vacancies.

use crate::domain::entities::{Vacancy, VacancyFields, VacancyFilter};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for vacancies.
///
/// Every read joins the employer's `full_name` as `employer_name`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VacancyRepository: Send + Sync {
    /// Lists vacancies matching `filter`, newest first.
    async fn list(&self, filter: VacancyFilter) -> Result<Vec<Vacancy>, AppError>;

    /// Counts vacancies matching `filter`, ignoring its offset and limit.
    async fn count(&self, filter: VacancyFilter) -> Result<i64, AppError>;

    /// Finds a vacancy without side effects.
    async fn find_by_id(&self, id: i64) -> Result<Option<Vacancy>, AppError>;

    /// Increments `views_count` and returns the vacancy with the new count.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the vacancy does not exist.
    async fn record_view(&self, id: i64) -> Result<Option<Vacancy>, AppError>;

    /// Inserts a vacancy and returns its id.
    async fn create(&self, employer_id: i64, fields: VacancyFields) -> Result<i64, AppError>;

    /// Replaces every editable field of a vacancy.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the vacancy does not exist.
    async fn update(&self, id: i64, fields: VacancyFields) -> Result<(), AppError>;
}
