//! PostgreSQL implementation of vacancy repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::{VACANCY_COLUMNS, VacancyRow};
use crate::domain::entities::{Vacancy, VacancyFields, VacancyFilter};
use crate::domain::repositories::VacancyRepository;
use crate::error::AppError;

/// PostgreSQL repository for vacancies.
pub struct PgVacancyRepository {
    pool: Arc<PgPool>,
}

impl PgVacancyRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Escapes `%`, `_` and `\` so user input is matched literally inside `ILIKE`.
fn like_pattern(input: &str) -> String {
    let escaped = input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[async_trait]
impl VacancyRepository for PgVacancyRepository {
    async fn list(&self, filter: VacancyFilter) -> Result<Vec<Vacancy>, AppError> {
        let sql = format!(
            r#"
            SELECT {VACANCY_COLUMNS}
            FROM vacancies v
            JOIN users u ON v.employer_id = u.id
            WHERE v.status = $1
              AND ($2::BIGINT IS NULL OR v.employer_id = $2)
              AND ($3::TEXT IS NULL OR v.title ILIKE $3 OR v.company ILIKE $3)
              AND ($4::TEXT IS NULL OR v.location ILIKE $4)
            ORDER BY v.created_at DESC, v.id DESC
            OFFSET $5
            LIMIT $6
            "#
        );

        let rows = sqlx::query_as::<_, VacancyRow>(&sql)
            .bind(filter.status.as_str())
            .bind(filter.employer_id)
            .bind(filter.query.as_deref().map(like_pattern))
            .bind(filter.location.as_deref().map(like_pattern))
            .bind(filter.offset)
            .bind(filter.limit)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.into_iter().map(Vacancy::try_from).collect()
    }

    async fn count(&self, filter: VacancyFilter) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)::BIGINT
            FROM vacancies v
            WHERE v.status = $1
              AND ($2::BIGINT IS NULL OR v.employer_id = $2)
              AND ($3::TEXT IS NULL OR v.title ILIKE $3 OR v.company ILIKE $3)
              AND ($4::TEXT IS NULL OR v.location ILIKE $4)
            "#,
        )
        .bind(filter.status.as_str())
        .bind(filter.employer_id)
        .bind(filter.query.as_deref().map(like_pattern))
        .bind(filter.location.as_deref().map(like_pattern))
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(total)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Vacancy>, AppError> {
        let sql = format!(
            r#"
            SELECT {VACANCY_COLUMNS}
            FROM vacancies v
            JOIN users u ON v.employer_id = u.id
            WHERE v.id = $1
            "#
        );

        let row = sqlx::query_as::<_, VacancyRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Vacancy::try_from).transpose()
    }

    async fn record_view(&self, id: i64) -> Result<Option<Vacancy>, AppError> {
        let sql = format!(
            r#"
            WITH v AS (
                UPDATE vacancies
                SET views_count = views_count + 1
                WHERE id = $1
                RETURNING *
            )
            SELECT {VACANCY_COLUMNS}
            FROM v
            JOIN users u ON v.employer_id = u.id
            "#
        );

        let row = sqlx::query_as::<_, VacancyRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Vacancy::try_from).transpose()
    }

    async fn create(&self, employer_id: i64, fields: VacancyFields) -> Result<i64, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO vacancies (
                employer_id, title, company, location, salary_min, salary_max,
                employment_type, experience, description, requirements, tags, status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id
            "#,
        )
        .bind(employer_id)
        .bind(fields.title)
        .bind(fields.company)
        .bind(fields.location)
        .bind(fields.salary_min)
        .bind(fields.salary_max)
        .bind(fields.employment_type)
        .bind(fields.experience)
        .bind(fields.description)
        .bind(fields.requirements)
        .bind(fields.tags)
        .bind(fields.status.as_str())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(id)
    }

    async fn update(&self, id: i64, fields: VacancyFields) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE vacancies SET
                title = $2, company = $3, location = $4, salary_min = $5, salary_max = $6,
                employment_type = $7, experience = $8, description = $9, requirements = $10,
                tags = $11, status = $12, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(fields.title)
        .bind(fields.company)
        .bind(fields.location)
        .bind(fields.salary_min)
        .bind(fields.salary_max)
        .bind(fields.employment_type)
        .bind(fields.experience)
        .bind(fields.description)
        .bind(fields.requirements)
        .bind(fields.tags)
        .bind(fields.status.as_str())
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Vacancy not found", json!({ "id": id })));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("rust"), "%rust%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
    }
}
