//! DTOs for favorite endpoints.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddFavoriteRequest {
    pub vacancy_id: Option<i64>,
}

/// Query form of removal: `DELETE /api/favorites?vacancy_id=`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct FavoriteQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub vacancy_id: Option<i64>,
}
