//! Vacancy entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Publication state of a vacancy. Only `active` vacancies accept applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VacancyStatus {
    #[default]
    Active,
    Inactive,
}

impl VacancyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VacancyStatus::Active => "active",
            VacancyStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for VacancyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VacancyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(VacancyStatus::Active),
            "inactive" => Ok(VacancyStatus::Inactive),
            other => Err(format!("unknown vacancy status '{other}'")),
        }
    }
}

/// A job posting, joined with the employer's display name.
#[derive(Debug, Clone, Serialize)]
pub struct Vacancy {
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
    pub status: VacancyStatus,
    pub views_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vacancy {
    pub fn is_active(&self) -> bool {
        self.status == VacancyStatus::Active
    }

    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.employer_id == user_id
    }
}

/// Editable vacancy fields, used both for creation and full replacement.
#[derive(Debug, Clone, Default)]
pub struct VacancyFields {
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
    pub status: VacancyStatus,
}

/// Listing filter. `status` is always applied; other fields narrow the result.
#[derive(Debug, Clone, Default)]
pub struct VacancyFilter {
    pub status: VacancyStatus,
    pub employer_id: Option<i64>,
    pub query: Option<String>,
    pub location: Option<String>,
    pub offset: i64,
    pub limit: i64,
}
