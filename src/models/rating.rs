use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Association row between a user and a movie. Several rows may exist for
/// the same pair; nothing here deduplicates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserMovieRating {
    pub user_id: String,
    pub movie_id: i32,
    pub rating: i32,
}
