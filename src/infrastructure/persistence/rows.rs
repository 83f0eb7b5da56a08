//! Row types decoded by `sqlx::FromRow` and their conversion into entities.
//!
//! Enum-valued columns are stored as `TEXT` guarded by `CHECK` constraints;
//! a value that fails to parse means the schema and the code disagree, which
//! is reported as an internal error.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;

use crate::domain::entities::{
    Application, Education, Experience, Skill, User, UserCredentials, Vacancy,
};
use crate::error::AppError;

fn parse_column<T: std::str::FromStr<Err = String>>(
    column: &'static str,
    value: &str,
) -> Result<T, AppError> {
    value.parse().map_err(|e: String| {
        tracing::error!(column, value, "Unexpected column value");
        AppError::internal("Corrupted row", json!({ "column": column, "reason": e }))
    })
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct UserRow {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub user_type: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for UserCredentials {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(UserCredentials {
            user: User {
                id: row.id,
                email: row.email,
                full_name: row.full_name,
                user_type: parse_column("user_type", &row.user_type)?,
                created_at: row.created_at,
            },
            password_hash: row.password_hash,
        })
    }
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        UserCredentials::try_from(row).map(|c| c.user)
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct VacancyRow {
    pub id: i64,
    pub employer_id: i64,
    pub employer_name: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub employment_type: Option<String>,
    pub experience: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub tags: Vec<String>,
    pub status: String,
    pub views_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<VacancyRow> for Vacancy {
    type Error = AppError;

    fn try_from(row: VacancyRow) -> Result<Self, Self::Error> {
        Ok(Vacancy {
            id: row.id,
            employer_id: row.employer_id,
            employer_name: row.employer_name,
            title: row.title,
            company: row.company,
            location: row.location,
            salary_min: row.salary_min,
            salary_max: row.salary_max,
            employment_type: row.employment_type,
            experience: row.experience,
            description: row.description,
            requirements: row.requirements,
            tags: row.tags,
            status: parse_column("status", &row.status)?,
            views_count: row.views_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Column list matching [`VacancyRow`], for queries aliasing `vacancies v` and `users u`.
pub(crate) const VACANCY_COLUMNS: &str = r#"
    v.id, v.employer_id, u.full_name AS employer_name, v.title, v.company, v.location,
    v.salary_min, v.salary_max, v.employment_type, v.experience, v.description,
    v.requirements, v.tags, v.status, v.views_count, v.created_at, v.updated_at
"#;

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ApplicationRow {
    pub id: i64,
    pub vacancy_id: i64,
    pub applicant_id: i64,
    pub resume_id: Option<i64>,
    pub cover_letter: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ApplicationRow> for Application {
    type Error = AppError;

    fn try_from(row: ApplicationRow) -> Result<Self, Self::Error> {
        Ok(Application {
            id: row.id,
            vacancy_id: row.vacancy_id,
            applicant_id: row.applicant_id,
            resume_id: row.resume_id,
            cover_letter: row.cover_letter,
            status: parse_column("status", &row.status)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ExperienceRow {
    pub id: i64,
    pub resume_id: i64,
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub description: Option<String>,
}

impl From<ExperienceRow> for Experience {
    fn from(row: ExperienceRow) -> Self {
        Experience {
            id: row.id,
            resume_id: row.resume_id,
            company: row.company,
            position: row.position,
            start_date: row.start_date,
            end_date: row.end_date,
            is_current: row.is_current,
            description: row.description,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct EducationRow {
    pub id: i64,
    pub resume_id: i64,
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
}

impl From<EducationRow> for Education {
    fn from(row: EducationRow) -> Self {
        Education {
            id: row.id,
            resume_id: row.resume_id,
            institution: row.institution,
            degree: row.degree,
            field_of_study: row.field_of_study,
            start_date: row.start_date,
            end_date: row.end_date,
            is_current: row.is_current,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct SkillRow {
    pub id: i64,
    pub resume_id: i64,
    pub skill_name: String,
    pub skill_level: Option<String>,
}

impl From<SkillRow> for Skill {
    fn from(row: SkillRow) -> Self {
        Skill {
            id: row.id,
            resume_id: row.resume_id,
            skill_name: row.skill_name,
            skill_level: row.skill_level,
        }
    }
}
