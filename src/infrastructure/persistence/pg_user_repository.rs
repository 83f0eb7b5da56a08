//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::UserRow;
use crate::domain::entities::{NewUser, ProfilePatch, User, UserCredentials, UserType};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on;

const EMAIL_CONSTRAINT: &str = "users_email_key";

/// PostgreSQL repository for user accounts.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_email_conflict(e: sqlx::Error, email: &str) -> AppError {
    if is_unique_violation_on(&e, EMAIL_CONSTRAINT) {
        return AppError::conflict(
            "User with this email already exists",
            json!({ "email": email }),
        );
    }
    e.into()
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create_with_session(
        &self,
        new_user: NewUser,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<User, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, password_hash, full_name, user_type)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password_hash, full_name, user_type, created_at
            "#,
        )
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(&new_user.full_name)
        .bind(new_user.user_type.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_email_conflict(e, &new_user.email))?;

        sqlx::query(
            r#"
            INSERT INTO user_sessions (user_id, token_hash, expires_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(row.id)
        .bind(token_hash)
        .bind(expires_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        row.try_into()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, full_name, user_type, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(UserCredentials::try_from).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserCredentials>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, full_name, user_type, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(UserCredentials::try_from).transpose()
    }

    async fn update_profile(&self, id: i64, patch: ProfilePatch) -> Result<User, AppError> {
        let email = patch.email.clone().unwrap_or_default();

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users SET
                full_name     = COALESCE($2::TEXT, full_name),
                email         = COALESCE($3::TEXT, email),
                password_hash = COALESCE($4::TEXT, password_hash),
                updated_at    = NOW()
            WHERE id = $1
            RETURNING id, email, password_hash, full_name, user_type, created_at
            "#,
        )
        .bind(id)
        .bind(patch.full_name)
        .bind(patch.email)
        .bind(patch.password_hash)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_email_conflict(e, &email))?;

        row.ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))?
            .try_into()
    }

    async fn list(&self, user_type: Option<UserType>) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, full_name, user_type, created_at
            FROM users
            WHERE ($1::TEXT IS NULL OR user_type = $1)
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_type.map(|t| t.as_str()))
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(User::try_from).collect()
    }
}
