//! PostgreSQL implementation of resume repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;

use super::rows::{EducationRow, ExperienceRow, SkillRow};
use crate::domain::entities::{Resume, ResumeDraft};
use crate::domain::repositories::ResumeRepository;
use crate::error::AppError;

/// PostgreSQL repository for the resume aggregate.
pub struct PgResumeRepository {
    pool: Arc<PgPool>,
}

impl PgResumeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Loads the child rows of `row` and assembles the aggregate.
    async fn assemble(&self, row: ResumeRow) -> Result<Resume, AppError> {
        let experience = sqlx::query_as::<_, ExperienceRow>(
            r#"
            SELECT id, resume_id, company, position, start_date, end_date, is_current, description
            FROM resume_experience
            WHERE resume_id = $1
            ORDER BY start_date DESC NULLS LAST, id
            "#,
        )
        .bind(row.id)
        .fetch_all(self.pool.as_ref())
        .await?;

        let education = sqlx::query_as::<_, EducationRow>(
            r#"
            SELECT id, resume_id, institution, degree, field_of_study, start_date, end_date, is_current
            FROM resume_education
            WHERE resume_id = $1
            ORDER BY start_date DESC NULLS LAST, id
            "#,
        )
        .bind(row.id)
        .fetch_all(self.pool.as_ref())
        .await?;

        let skills = sqlx::query_as::<_, SkillRow>(
            r#"
            SELECT id, resume_id, skill_name, skill_level
            FROM resume_skills
            WHERE resume_id = $1
            ORDER BY id
            "#,
        )
        .bind(row.id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(Resume {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            full_name: row.full_name,
            email: row.email,
            phone: row.phone,
            location: row.location,
            position: row.position,
            salary_min: row.salary_min,
            salary_max: row.salary_max,
            about_me: row.about_me,
            photo_url: row.photo_url,
            is_published: row.is_published,
            created_at: row.created_at,
            updated_at: row.updated_at,
            experience: experience.into_iter().map(Into::into).collect(),
            education: education.into_iter().map(Into::into).collect(),
            skills: skills.into_iter().map(Into::into).collect(),
        })
    }
}

#[derive(sqlx::FromRow)]
struct ResumeRow {
    id: i64,
    user_id: i64,
    title: String,
    full_name: String,
    email: String,
    phone: Option<String>,
    location: Option<String>,
    position: Option<String>,
    salary_min: Option<i32>,
    salary_max: Option<i32>,
    about_me: Option<String>,
    photo_url: Option<String>,
    is_published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

const RESUME_COLUMNS: &str = r#"
    id, user_id, title, full_name, email, phone, location, position,
    salary_min, salary_max, about_me, photo_url, is_published, created_at, updated_at
"#;

/// Inserts every child row of `draft` under `resume_id`.
async fn insert_children(
    tx: &mut Transaction<'_, Postgres>,
    resume_id: i64,
    draft: &ResumeDraft,
) -> Result<(), AppError> {
    for exp in &draft.experience {
        sqlx::query(
            r#"
            INSERT INTO resume_experience (
                resume_id, company, position, start_date, end_date, is_current, description
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(resume_id)
        .bind(&exp.company)
        .bind(&exp.position)
        .bind(exp.start_date)
        .bind(exp.end_date)
        .bind(exp.is_current)
        .bind(&exp.description)
        .execute(&mut **tx)
        .await?;
    }

    for edu in &draft.education {
        sqlx::query(
            r#"
            INSERT INTO resume_education (
                resume_id, institution, degree, field_of_study, start_date, end_date, is_current
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(resume_id)
        .bind(&edu.institution)
        .bind(&edu.degree)
        .bind(&edu.field_of_study)
        .bind(edu.start_date)
        .bind(edu.end_date)
        .bind(edu.is_current)
        .execute(&mut **tx)
        .await?;
    }

    for skill in &draft.skills {
        sqlx::query(
            r#"
            INSERT INTO resume_skills (resume_id, skill_name, skill_level)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(resume_id)
        .bind(&skill.skill_name)
        .bind(&skill.skill_level)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

#[async_trait]
impl ResumeRepository for PgResumeRepository {
    async fn find_latest_for_user(&self, user_id: i64) -> Result<Option<Resume>, AppError> {
        let sql = format!(
            r#"
            SELECT {RESUME_COLUMNS}
            FROM resumes
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#
        );

        let row = sqlx::query_as::<_, ResumeRow>(&sql)
            .bind(user_id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        match row {
            Some(row) => self.assemble(row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Resume>, AppError> {
        let sql = format!("SELECT {RESUME_COLUMNS} FROM resumes WHERE id = $1");

        let row = sqlx::query_as::<_, ResumeRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        match row {
            Some(row) => self.assemble(row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn owner_of(&self, id: i64) -> Result<Option<i64>, AppError> {
        let owner = sqlx::query_scalar::<_, i64>("SELECT user_id FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(owner)
    }

    async fn is_shared_with_employer(
        &self,
        resume_id: i64,
        employer_id: i64,
    ) -> Result<bool, AppError> {
        let shared = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM applications a
                JOIN vacancies v ON a.vacancy_id = v.id
                WHERE a.resume_id = $1 AND v.employer_id = $2
            )
            "#,
        )
        .bind(resume_id)
        .bind(employer_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(shared)
    }

    async fn create(&self, user_id: i64, draft: ResumeDraft) -> Result<i64, AppError> {
        let mut tx = self.pool.begin().await?;

        let resume_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO resumes (
                user_id, title, full_name, email, phone, location,
                position, salary_min, salary_max, about_me, photo_url, is_published
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(&draft.title)
        .bind(&draft.full_name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(&draft.location)
        .bind(&draft.position)
        .bind(draft.salary_min)
        .bind(draft.salary_max)
        .bind(&draft.about_me)
        .bind(&draft.photo_url)
        .bind(draft.is_published)
        .fetch_one(&mut *tx)
        .await?;

        insert_children(&mut tx, resume_id, &draft).await?;

        tx.commit().await?;
        Ok(resume_id)
    }

    async fn replace(&self, id: i64, draft: ResumeDraft) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE resumes SET
                title = $2, full_name = $3, email = $4, phone = $5, location = $6,
                position = $7, salary_min = $8, salary_max = $9, about_me = $10,
                photo_url = $11, is_published = $12, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.full_name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(&draft.location)
        .bind(&draft.position)
        .bind(draft.salary_min)
        .bind(draft.salary_max)
        .bind(&draft.about_me)
        .bind(&draft.photo_url)
        .bind(draft.is_published)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::not_found("Resume not found", json!({ "id": id })));
        }

        for table in ["resume_experience", "resume_education", "resume_skills"] {
            sqlx::query(&format!("DELETE FROM {table} WHERE resume_id = $1"))
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        insert_children(&mut tx, id, &draft).await?;

        tx.commit().await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
