use sqlx::PgPool;

use super::MOVIE_WITH_RATINGS;
use crate::{errors::AppError, models::MovieWithRatings};

pub async fn get_all_movies(postgres: &PgPool) -> Result<Vec<MovieWithRatings>, AppError> {
    let query = format!("{MOVIE_WITH_RATINGS} GROUP BY m.id ORDER BY m.id");

    let movies = sqlx::query_as::<_, MovieWithRatings>(&query)
        .fetch_all(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch movies: {}", e)))?;

    Ok(movies)
}

/// Case-sensitive substring match. `strpos` keeps `%` and `_` in the query
/// literal, unlike `LIKE`.
pub async fn get_movies_by_name(
    name: &str,
    postgres: &PgPool,
) -> Result<Vec<MovieWithRatings>, AppError> {
    let query = format!(
        "{MOVIE_WITH_RATINGS}
        WHERE strpos(m.name, $1) > 0
        GROUP BY m.id
        ORDER BY m.id"
    );

    let movies = sqlx::query_as::<_, MovieWithRatings>(&query)
        .bind(name)
        .fetch_all(postgres)
        .await
        .map_err(|e| {
            AppError::DatabaseError(format!("Failed to search movies by name: {}", e))
        })?;

    Ok(movies)
}

pub async fn get_movie_by_id(
    id: i32,
    postgres: &PgPool,
) -> Result<Option<MovieWithRatings>, AppError> {
    let query = format!("{MOVIE_WITH_RATINGS} WHERE m.id = $1 GROUP BY m.id");

    let movie = sqlx::query_as::<_, MovieWithRatings>(&query)
        .bind(id)
        .fetch_optional(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch movie {}: {}", id, e)))?;

    Ok(movie)
}

pub async fn movie_exists(id: i32, postgres: &PgPool) -> Result<bool, AppError> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(postgres)
            .await
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to check movie {}: {}", id, e))
            })?;

    Ok(exists)
}
