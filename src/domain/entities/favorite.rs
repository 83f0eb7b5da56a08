//! Favorite (bookmarked vacancy).

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Vacancy;

/// A vacancy bookmarked by a user, with the time it was bookmarked.
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteVacancy {
    #[serde(flatten)]
    pub vacancy: Vacancy,
    pub favorited_at: DateTime<Utc>,
}
