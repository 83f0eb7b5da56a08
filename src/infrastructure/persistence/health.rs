//! Database liveness probe used by `GET /health`.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::error::AppError;

/// Checks that the backing store answers queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Runs a trivial round-trip query.
    async fn ping(&self) -> Result<(), AppError>;
}

/// PostgreSQL probe: `SELECT 1` on a pooled connection.
pub struct PgHealthCheck {
    pool: Arc<PgPool>,
}

impl PgHealthCheck {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthCheck for PgHealthCheck {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
