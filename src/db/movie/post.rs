use sqlx::PgPool;

use super::MOVIE_COLUMNS;
use crate::{
    errors::AppError,
    models::{Movie, NewMovie},
};

pub async fn create_movie(movie: NewMovie, postgres: &PgPool) -> Result<Movie, AppError> {
    match movie.id {
        Some(id) => insert_with_id(movie.with_id(id), postgres).await,
        None => insert_with_identity(movie, postgres).await,
    }
}

async fn insert_with_identity(movie: NewMovie, postgres: &PgPool) -> Result<Movie, AppError> {
    let query = format!(
        "INSERT INTO movies (name, genre, release_year)
        VALUES ($1, $2, $3)
        RETURNING {MOVIE_COLUMNS}"
    );

    let created = sqlx::query_as::<_, Movie>(&query)
        .bind(&movie.name)
        .bind(&movie.genre)
        .bind(movie.release_year)
        .fetch_one(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to create movie: {}", e)))?;

    Ok(created)
}

/// Inserts a caller-chosen id and moves the identity sequence past it so later
/// generated ids do not collide. Both statements share one transaction.
async fn insert_with_id(movie: Movie, postgres: &PgPool) -> Result<Movie, AppError> {
    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to open transaction: {}", e)))?;

    let query = format!(
        "INSERT INTO movies (id, name, genre, release_year)
        VALUES ($1, $2, $3, $4)
        RETURNING {MOVIE_COLUMNS}"
    );

    let created = sqlx::query_as::<_, Movie>(&query)
        .bind(movie.id)
        .bind(&movie.name)
        .bind(&movie.genre)
        .bind(movie.release_year)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict(format!("Movie with id {} already exists", movie.id))
            }
            e => AppError::DatabaseError(format!("Failed to create movie: {}", e)),
        })?;

    sqlx::query(
        "SELECT setval(pg_get_serial_sequence('movies', 'id'), GREATEST(MAX(id), 1))
        FROM movies",
    )
    .execute(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to advance movie ids: {}", e)))?;

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit movie: {}", e)))?;

    Ok(created)
}
