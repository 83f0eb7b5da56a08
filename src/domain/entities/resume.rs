//! Resume aggregate: a resume row plus its experience, education and skill rows.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::utils::month_date;

/// Title given to a resume created without one.
pub const DEFAULT_RESUME_TITLE: &str = "Моё резюме";

#[derive(Debug, Clone, Serialize)]
pub struct Resume {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub position: Option<String>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub about_me: Option<String>,
    pub photo_url: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
}

impl Resume {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Experience {
    pub id: i64,
    pub resume_id: i64,
    pub company: Option<String>,
    pub position: Option<String>,
    #[serde(with = "month_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(with = "month_date")]
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub id: i64,
    pub resume_id: i64,
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    #[serde(with = "month_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(with = "month_date")]
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub id: i64,
    pub resume_id: i64,
    pub skill_name: String,
    pub skill_level: Option<String>,
}

/// Full content of a resume as submitted by its owner.
///
/// Used for both creation and replacement: on update every child row is
/// deleted and the draft's children are inserted again.
#[derive(Debug, Clone, Default)]
pub struct ResumeDraft {
    pub title: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub position: Option<String>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub about_me: Option<String>,
    pub photo_url: Option<String>,
    pub is_published: bool,
    pub experience: Vec<ExperienceDraft>,
    pub education: Vec<EducationDraft>,
    pub skills: Vec<SkillDraft>,
}

#[derive(Debug, Clone, Default)]
pub struct ExperienceDraft {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct EducationDraft {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SkillDraft {
    pub skill_name: String,
    pub skill_level: Option<String>,
}
