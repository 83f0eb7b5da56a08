//! PostgreSQL implementation of favorite repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::{VACANCY_COLUMNS, VacancyRow};
use crate::domain::entities::{FavoriteVacancy, Vacancy};
use crate::domain::repositories::FavoriteRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on;

const DUPLICATE_CONSTRAINT: &str = "favorites_user_vacancy_key";

/// PostgreSQL repository for bookmarked vacancies.
pub struct PgFavoriteRepository {
    pool: Arc<PgPool>,
}

impl PgFavoriteRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct FavoriteRow {
    #[sqlx(flatten)]
    vacancy: VacancyRow,
    favorited_at: DateTime<Utc>,
}

#[async_trait]
impl FavoriteRepository for PgFavoriteRepository {
    async fn list(&self, user_id: i64) -> Result<Vec<FavoriteVacancy>, AppError> {
        let sql = format!(
            r#"
            SELECT {VACANCY_COLUMNS}, f.created_at AS favorited_at
            FROM favorites f
            JOIN vacancies v ON f.vacancy_id = v.id
            JOIN users u ON v.employer_id = u.id
            WHERE f.user_id = $1
            ORDER BY f.created_at DESC, f.id DESC
            "#
        );

        let rows = sqlx::query_as::<_, FavoriteRow>(&sql)
            .bind(user_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.into_iter()
            .map(|r| {
                Ok(FavoriteVacancy {
                    vacancy: Vacancy::try_from(r.vacancy)?,
                    favorited_at: r.favorited_at,
                })
            })
            .collect()
    }

    async fn add(&self, user_id: i64, vacancy_id: i64) -> Result<i64, AppError> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO favorites (user_id, vacancy_id)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(vacancy_id)
        .fetch_one(&mut *tx)
        .await;

        match inserted {
            Ok(id) => {
                tx.commit().await?;
                Ok(id)
            }
            Err(e) => {
                tx.rollback().await?;
                if is_unique_violation_on(&e, DUPLICATE_CONSTRAINT) {
                    return Err(AppError::conflict(
                        "Vacancy is already in favorites",
                        json!({ "vacancy_id": vacancy_id }),
                    ));
                }
                Err(e.into())
            }
        }
    }

    async fn remove(&self, user_id: i64, vacancy_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND vacancy_id = $2")
            .bind(user_id)
            .bind(vacancy_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
