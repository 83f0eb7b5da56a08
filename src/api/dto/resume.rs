//! DTOs for resume endpoints.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{
    EducationDraft, ExperienceDraft, Resume, ResumeDraft, SkillDraft,
};
use crate::utils::month_date;

/// Digits, spaces, `+`, `-` and parentheses. Empty is allowed and means "not given".
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+()\- ]*$").unwrap());

/// Body of `POST /api/resumes` and `PUT /api/resumes/{id}`.
///
/// Child dates accept `YYYY-MM`, `YYYY-MM-DD`, an empty string, or null.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ResumeRequest {
    #[validate(length(max = 255))]
    pub title: String,

    #[validate(length(max = 255))]
    pub full_name: String,

    #[validate(length(max = 255))]
    pub email: String,

    #[validate(length(max = 50), regex(path = "*PHONE_REGEX"))]
    pub phone: Option<String>,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    #[validate(length(max = 255))]
    pub position: Option<String>,

    #[validate(range(min = 0))]
    pub salary_min: Option<i32>,

    #[validate(range(min = 0))]
    pub salary_max: Option<i32>,

    pub about_me: Option<String>,

    #[validate(length(max = 2048))]
    pub photo_url: Option<String>,

    pub is_published: bool,

    #[validate(nested)]
    pub experience: Vec<ExperienceItem>,

    #[validate(nested)]
    pub education: Vec<EducationItem>,

    #[validate(nested)]
    pub skills: Vec<SkillItem>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ExperienceItem {
    #[validate(length(max = 255))]
    pub company: Option<String>,

    #[validate(length(max = 255))]
    pub position: Option<String>,

    #[serde(with = "month_date")]
    pub start_date: Option<NaiveDate>,

    #[serde(with = "month_date")]
    pub end_date: Option<NaiveDate>,

    pub is_current: bool,

    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct EducationItem {
    #[validate(length(max = 255))]
    pub institution: Option<String>,

    #[validate(length(max = 255))]
    pub degree: Option<String>,

    #[validate(length(max = 255))]
    pub field_of_study: Option<String>,

    #[serde(with = "month_date")]
    pub start_date: Option<NaiveDate>,

    #[serde(with = "month_date")]
    pub end_date: Option<NaiveDate>,

    pub is_current: bool,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SkillItem {
    #[validate(length(max = 100))]
    pub skill_name: String,

    #[validate(length(max = 50))]
    pub skill_level: Option<String>,
}

impl From<ResumeRequest> for ResumeDraft {
    fn from(r: ResumeRequest) -> Self {
        ResumeDraft {
            title: r.title,
            full_name: r.full_name,
            email: r.email,
            phone: r.phone,
            location: r.location,
            position: r.position,
            salary_min: r.salary_min,
            salary_max: r.salary_max,
            about_me: r.about_me,
            photo_url: r.photo_url,
            is_published: r.is_published,
            experience: r
                .experience
                .into_iter()
                .map(|e| ExperienceDraft {
                    company: e.company,
                    position: e.position,
                    start_date: e.start_date,
                    end_date: e.end_date,
                    is_current: e.is_current,
                    description: e.description,
                })
                .collect(),
            education: r
                .education
                .into_iter()
                .map(|e| EducationDraft {
                    institution: e.institution,
                    degree: e.degree,
                    field_of_study: e.field_of_study,
                    start_date: e.start_date,
                    end_date: e.end_date,
                    is_current: e.is_current,
                })
                .collect(),
            skills: r
                .skills
                .into_iter()
                .map(|s| SkillDraft {
                    skill_name: s.skill_name,
                    skill_level: s.skill_level,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub success: bool,
    pub resume: Resume,
}

#[derive(Debug, Serialize)]
pub struct ResumeCreatedResponse {
    pub success: bool,
    pub resume_id: i64,
}
