use serde::Serialize;

use crate::{
    db::MovieStore,
    errors::AppError,
    models::{Movie, MovieWithRatings, NewMovie},
};

#[derive(Debug, Serialize)]
pub struct DeleteMessage {
    pub message: &'static str,
}

pub const MOVIE_NOT_FOUND: &str = "Movie not found";

pub fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("Invalid movie id '{}'", raw)))
}

fn require_id(raw: Option<&str>) -> Result<i32, AppError> {
    let raw = raw.ok_or_else(|| AppError::BadRequest("Missing id path parameter".into()))?;
    parse_id(raw)
}

fn parse_movie(body: Option<&str>) -> Result<NewMovie, AppError> {
    let body = body.ok_or_else(|| AppError::Deserialization("Missing movie body".into()))?;
    serde_json::from_str(body)
        .map_err(|e| AppError::Deserialization(format!("Invalid movie payload: {}", e)))
}

pub async fn list_movies(store: &dyn MovieStore) -> Result<Vec<MovieWithRatings>, AppError> {
    let movies = store.list_movies().await?;
    tracing::info!("Listed {} movies", movies.len());
    Ok(movies)
}

pub async fn search_movies(
    store: &dyn MovieStore,
    name: &str,
) -> Result<Vec<MovieWithRatings>, AppError> {
    let movies = store.search_movies(name).await?;
    tracing::info!("Found {} movies matching '{}'", movies.len(), name);
    Ok(movies)
}

pub async fn get_movie(store: &dyn MovieStore, raw_id: &str) -> Result<MovieWithRatings, AppError> {
    let id = parse_id(raw_id)?;

    store
        .get_movie(id)
        .await?
        .ok_or_else(|| AppError::NotFound(MOVIE_NOT_FOUND.into()))
}

/// A caller-supplied id is kept as given; a taken id is rejected.
pub async fn create_movie(store: &dyn MovieStore, body: Option<&str>) -> Result<Movie, AppError> {
    let movie = parse_movie(body)?;
    let created = store.create_movie(movie).await?;

    tracing::info!("Movie created: {} (ID: {})", created.name, created.id);
    Ok(created)
}

/// The path id always wins over any id in the body.
pub async fn update_movie(
    store: &dyn MovieStore,
    raw_id: Option<&str>,
    body: Option<&str>,
) -> Result<Movie, AppError> {
    let id = require_id(raw_id)?;

    if !store.movie_exists(id).await? {
        return Err(AppError::NotFound(MOVIE_NOT_FOUND.into()));
    }

    let movie = parse_movie(body)?.with_id(id);

    let updated = store
        .update_movie(movie)
        .await?
        .ok_or_else(|| AppError::NotFound(MOVIE_NOT_FOUND.into()))?;

    tracing::info!("Movie updated: {} (ID: {})", updated.name, updated.id);
    Ok(updated)
}

pub async fn delete_movie(
    store: &dyn MovieStore,
    raw_id: Option<&str>,
) -> Result<DeleteMessage, AppError> {
    let id = require_id(raw_id)?;

    if !store.delete_movie(id).await? {
        return Err(AppError::NotFound(MOVIE_NOT_FOUND.into()));
    }

    Ok(DeleteMessage {
        message: "Movie deleted successfully",
    })
}
