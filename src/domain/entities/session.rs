//! Session entity.

use chrono::{DateTime, Utc};

/// A login session. Only the digest of the token is ever stored.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Returns true once `expires_at` has passed.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
