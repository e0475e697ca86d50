use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i32,
    pub name: String,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
}

/// Body of a create or update request. `id` is honoured on create only.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    pub id: Option<i32>,
    pub name: String,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
}

impl NewMovie {
    pub fn with_id(self, id: i32) -> Movie {
        Movie {
            id,
            name: self.name,
            genre: self.genre,
            release_year: self.release_year,
        }
    }
}

/// A movie together with every rating value recorded against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct MovieWithRatings {
    #[sqlx(flatten)]
    pub movie: Movie,
    pub ratings: Vec<i32>,
}
