use sqlx::PgPool;

use super::MOVIE_COLUMNS;
use crate::{errors::AppError, models::Movie};

/// Full-row replace. `None` when no row carries `movie.id`.
pub async fn update_movie(movie: Movie, postgres: &PgPool) -> Result<Option<Movie>, AppError> {
    let query = format!(
        "UPDATE movies
        SET name = $2, genre = $3, release_year = $4
        WHERE id = $1
        RETURNING {MOVIE_COLUMNS}"
    );

    let updated = sqlx::query_as::<_, Movie>(&query)
        .bind(movie.id)
        .bind(&movie.name)
        .bind(&movie.genre)
        .bind(movie.release_year)
        .fetch_optional(postgres)
        .await
        .map_err(|e| {
            AppError::DatabaseError(format!("Failed to update movie {}: {}", movie.id, e))
        })?;

    Ok(updated)
}
