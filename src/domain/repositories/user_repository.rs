//! Repository trait for user accounts.

use crate::domain::entities::{NewUser, ProfilePatch, User, UserCredentials, UserType};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for user accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a user and its first session in a single transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_with_session(
        &self,
        new_user: NewUser,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<User, AppError>;

    /// Finds a user and its password hash by (lowercased) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, AppError>;

    /// Finds a user and its password hash by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<UserCredentials>, AppError>;

    /// Applies a partial profile update and returns the updated user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new email belongs to another account.
    /// Returns [`AppError::NotFound`] if the user does not exist.
    async fn update_profile(&self, id: i64, patch: ProfilePatch) -> Result<User, AppError>;

    /// Lists accounts, newest first, optionally of one role.
    async fn list(&self, user_type: Option<UserType>) -> Result<Vec<User>, AppError>;
}
