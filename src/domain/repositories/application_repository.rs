//! Repository trait for applications.

use crate::domain::entities::{
    ApplicationStatus, CandidateApplication, EmployerApplication, NewApplication,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for applications.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Applications sent by a candidate, newest first.
    async fn list_for_candidate(
        &self,
        applicant_id: i64,
    ) -> Result<Vec<CandidateApplication>, AppError>;

    /// Applications to an employer's vacancies, newest first, optionally for one vacancy.
    async fn list_for_employer(
        &self,
        employer_id: i64,
        vacancy_id: Option<i64>,
    ) -> Result<Vec<EmployerApplication>, AppError>;

    /// Inserts an application inside a transaction and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the candidate already applied to the
    /// vacancy; the transaction is rolled back.
    async fn create(&self, application: NewApplication) -> Result<i64, AppError>;

    /// Returns the id of the employer owning the application's vacancy.
    async fn employer_of(&self, application_id: i64) -> Result<Option<i64>, AppError>;

    /// Sets the review status.
    async fn update_status(
        &self,
        application_id: i64,
        status: ApplicationStatus,
    ) -> Result<(), AppError>;
}
