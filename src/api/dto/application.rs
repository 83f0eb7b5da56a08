//! DTOs for application endpoints.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

/// Query parameters of `GET /api/applications`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ApplicationListQuery {
    /// Employers only: restrict to one vacancy.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub vacancy_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ApplyRequest {
    pub vacancy_id: Option<i64>,

    pub resume_id: Option<i64>,

    #[validate(length(max = 5000))]
    pub cover_letter: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateStatusRequest {
    pub status: String,
}
