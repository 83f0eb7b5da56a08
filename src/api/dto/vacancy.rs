//! DTOs for vacancy endpoints.

use serde::Deserialize;
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use super::pagination::PaginationParams;
use crate::domain::entities::{VacancyFields, VacancyFilter, VacancyStatus};
use crate::error::AppError;

/// Query parameters of `GET /api/vacancies`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct VacancyListQuery {
    #[serde(flatten)]
    pub pagination: PaginationParams,

    /// `active` (default) or `inactive`.
    pub status: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub employer_id: Option<i64>,

    /// Substring of title or company, case-insensitive.
    pub q: Option<String>,

    pub location: Option<String>,
}

impl VacancyListQuery {
    pub fn into_filter(self) -> Result<VacancyFilter, AppError> {
        let (offset, limit) = self
            .pagination
            .validate_and_get_offset_limit()
            .map_err(|e| AppError::bad_request(e, json!({})))?;

        let status = parse_status(self.status.as_deref())?;

        Ok(VacancyFilter {
            status,
            employer_id: self.employer_id,
            query: self.q,
            location: self.location,
            offset,
            limit,
        })
    }
}

/// Body of `POST /api/vacancies` and `PUT /api/vacancies/{id}`.
///
/// `PUT` replaces every field, so omitted optional fields become null.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct VacancyRequest {
    #[validate(length(max = 255))]
    pub title: String,

    #[validate(length(max = 255))]
    pub company: String,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    #[validate(range(min = 0))]
    pub salary_min: Option<i32>,

    #[validate(range(min = 0))]
    pub salary_max: Option<i32>,

    #[validate(length(max = 50))]
    pub employment_type: Option<String>,

    #[validate(length(max = 50))]
    pub experience: Option<String>,

    pub description: Option<String>,

    pub requirements: Option<String>,

    #[validate(length(max = 50))]
    pub tags: Vec<String>,

    pub status: Option<String>,
}

impl VacancyRequest {
    pub fn into_fields(self) -> Result<VacancyFields, AppError> {
        let status = parse_status(self.status.as_deref())?;

        Ok(VacancyFields {
            title: self.title,
            company: self.company,
            location: self.location,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            employment_type: self.employment_type,
            experience: self.experience,
            description: self.description,
            requirements: self.requirements,
            tags: self.tags,
            status,
        })
    }
}

fn parse_status(raw: Option<&str>) -> Result<VacancyStatus, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(VacancyStatus::default()),
        Some(s) => s.parse().map_err(|reason: String| {
            AppError::bad_request(
                "Invalid vacancy status",
                json!({ "reason": reason, "allowed": ["active", "inactive"] }),
            )
        }),
    }
}
