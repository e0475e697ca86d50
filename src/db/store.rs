use async_trait::async_trait;

use crate::{
    errors::AppError,
    models::{Movie, MovieWithRatings, NewMovie},
};

/// Handle onto the relational store. Built once at start and shared by every
/// request; each method is a single round trip and at most one commit.
#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn list_movies(&self) -> Result<Vec<MovieWithRatings>, AppError>;

    async fn search_movies(&self, name: &str) -> Result<Vec<MovieWithRatings>, AppError>;

    async fn get_movie(&self, id: i32) -> Result<Option<MovieWithRatings>, AppError>;

    async fn movie_exists(&self, id: i32) -> Result<bool, AppError>;

    /// Fails with [`AppError::Conflict`] when `movie.id` is already taken.
    async fn create_movie(&self, movie: NewMovie) -> Result<Movie, AppError>;

    async fn update_movie(&self, movie: Movie) -> Result<Option<Movie>, AppError>;

    /// `false` when there was nothing to delete.
    async fn delete_movie(&self, id: i32) -> Result<bool, AppError>;
}
