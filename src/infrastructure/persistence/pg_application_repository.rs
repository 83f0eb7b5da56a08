//! PostgreSQL implementation of application repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::ApplicationRow;
use crate::domain::entities::{
    Application, ApplicationStatus, CandidateApplication, EmployerApplication, NewApplication,
};
use crate::domain::repositories::ApplicationRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on;

const DUPLICATE_CONSTRAINT: &str = "applications_vacancy_applicant_key";

/// PostgreSQL repository for applications.
pub struct PgApplicationRepository {
    pool: Arc<PgPool>,
}

impl PgApplicationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CandidateApplicationRow {
    #[sqlx(flatten)]
    application: ApplicationRow,
    title: String,
    company: String,
    salary_min: Option<i32>,
    salary_max: Option<i32>,
}

#[derive(sqlx::FromRow)]
struct EmployerApplicationRow {
    #[sqlx(flatten)]
    application: ApplicationRow,
    full_name: String,
    email: String,
    title: String,
    company: String,
    position: Option<String>,
    phone: Option<String>,
}

#[async_trait]
impl ApplicationRepository for PgApplicationRepository {
    async fn list_for_candidate(
        &self,
        applicant_id: i64,
    ) -> Result<Vec<CandidateApplication>, AppError> {
        let rows = sqlx::query_as::<_, CandidateApplicationRow>(
            r#"
            SELECT a.id, a.vacancy_id, a.applicant_id, a.resume_id, a.cover_letter, a.status,
                   a.created_at, a.updated_at,
                   v.title, v.company, v.salary_min, v.salary_max
            FROM applications a
            JOIN vacancies v ON a.vacancy_id = v.id
            WHERE a.applicant_id = $1
            ORDER BY a.created_at DESC, a.id DESC
            "#,
        )
        .bind(applicant_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter()
            .map(|r| {
                Ok(CandidateApplication {
                    application: Application::try_from(r.application)?,
                    title: r.title,
                    company: r.company,
                    salary_min: r.salary_min,
                    salary_max: r.salary_max,
                })
            })
            .collect()
    }

    async fn list_for_employer(
        &self,
        employer_id: i64,
        vacancy_id: Option<i64>,
    ) -> Result<Vec<EmployerApplication>, AppError> {
        let rows = sqlx::query_as::<_, EmployerApplicationRow>(
            r#"
            SELECT a.id, a.vacancy_id, a.applicant_id, a.resume_id, a.cover_letter, a.status,
                   a.created_at, a.updated_at,
                   u.full_name, u.email,
                   v.title, v.company,
                   r.position, r.phone
            FROM applications a
            JOIN users u ON a.applicant_id = u.id
            JOIN vacancies v ON a.vacancy_id = v.id
            LEFT JOIN resumes r ON a.resume_id = r.id
            WHERE v.employer_id = $1
              AND ($2::BIGINT IS NULL OR a.vacancy_id = $2)
            ORDER BY a.created_at DESC, a.id DESC
            "#,
        )
        .bind(employer_id)
        .bind(vacancy_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter()
            .map(|r| {
                Ok(EmployerApplication {
                    application: Application::try_from(r.application)?,
                    full_name: r.full_name,
                    email: r.email,
                    title: r.title,
                    company: r.company,
                    position: r.position,
                    phone: r.phone,
                })
            })
            .collect()
    }

    async fn create(&self, application: NewApplication) -> Result<i64, AppError> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO applications (vacancy_id, applicant_id, resume_id, cover_letter)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(application.vacancy_id)
        .bind(application.applicant_id)
        .bind(application.resume_id)
        .bind(&application.cover_letter)
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
                        "You have already applied to this vacancy",
                        json!({ "vacancy_id": application.vacancy_id }),
                    ));
                }
                Err(e.into())
            }
        }
    }

    async fn employer_of(&self, application_id: i64) -> Result<Option<i64>, AppError> {
        let employer_id = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT v.employer_id
            FROM applications a
            JOIN vacancies v ON a.vacancy_id = v.id
            WHERE a.id = $1
            "#,
        )
        .bind(application_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(employer_id)
    }

    async fn update_status(
        &self,
        application_id: i64,
        status: ApplicationStatus,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE applications
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(application_id)
        .bind(status.as_str())
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Application not found",
                json!({ "id": application_id }),
            ));
        }

        Ok(())
    }
}
