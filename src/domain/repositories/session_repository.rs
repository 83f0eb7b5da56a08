//! Repository trait for login sessions.

use crate::domain::entities::{Session, User};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for login sessions.
///
/// Sessions are looked up by the digest of the raw token; the raw token is
/// never persisted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Creates a session for `user_id`.
    async fn create(
        &self,
        user_id: i64,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<Session, AppError>;

    /// Resolves a token digest to its session and user.
    ///
    /// Expired sessions are returned as well; the caller decides how to treat them.
    async fn find_with_user(&self, token_hash: &str) -> Result<Option<(Session, User)>, AppError>;

    /// Expires a session immediately.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if a live session was expired.
    async fn expire(&self, token_hash: &str) -> Result<bool, AppError>;

    /// Expires every live session of a user. Returns the number of sessions touched.
    async fn expire_all_for_user(&self, user_id: i64) -> Result<u64, AppError>;

    /// Expires every live session of a user except the one with `keep_token_hash`.
    async fn expire_others_for_user(
        &self,
        user_id: i64,
        keep_token_hash: &str,
    ) -> Result<u64, AppError>;

    /// Deletes expired sessions. Returns the number of rows removed.
    async fn purge_expired(&self) -> Result<u64, AppError>;
}
