//! Application (a candidate's response to a vacancy).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Review state set by the employer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "accepted" => Ok(ApplicationStatus::Accepted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(format!("unknown application status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Application {
    pub id: i64,
    pub vacancy_id: i64,
    pub applicant_id: i64,
    pub resume_id: Option<i64>,
    pub cover_letter: String,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An application as seen by the candidate who sent it.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateApplication {
    #[serde(flatten)]
    pub application: Application,
    pub title: String,
    pub company: String,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
}

/// An application as seen by the employer who owns the vacancy.
#[derive(Debug, Clone, Serialize)]
pub struct EmployerApplication {
    #[serde(flatten)]
    pub application: Application,
    pub full_name: String,
    pub email: String,
    pub title: String,
    pub company: String,
    pub position: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewApplication {
    pub vacancy_id: i64,
    pub applicant_id: i64,
    pub resume_id: Option<i64>,
    pub cover_letter: String,
}
