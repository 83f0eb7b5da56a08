//! Repository trait for resumes and their child rows.

use crate::domain::entities::{Resume, ResumeDraft};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the resume aggregate.
///
/// Reads assemble the full aggregate (experience and education ordered by
/// `start_date DESC`); writes touch the resume row and all children in one
/// transaction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// The user's most recently created resume.
    async fn find_latest_for_user(&self, user_id: i64) -> Result<Option<Resume>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Resume>, AppError>;

    /// Returns the owner's user id, or `None` if the resume does not exist.
    async fn owner_of(&self, id: i64) -> Result<Option<i64>, AppError>;

    /// True if the resume was attached to an application for one of the employer's vacancies.
    async fn is_shared_with_employer(
        &self,
        resume_id: i64,
        employer_id: i64,
    ) -> Result<bool, AppError>;

    /// Inserts the resume and its children. Returns the new resume id.
    async fn create(&self, user_id: i64, draft: ResumeDraft) -> Result<i64, AppError>;

    /// Overwrites the resume row and replaces all children.
    async fn replace(&self, id: i64, draft: ResumeDraft) -> Result<(), AppError>;

    /// Deletes the resume; children cascade. Returns `Ok(false)` if nothing was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
