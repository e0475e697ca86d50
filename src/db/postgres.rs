use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{
    config::Config,
    db::{
        movie::{delete, get, post, put},
        store::MovieStore,
    },
    errors::AppError,
    models::{Movie, MovieWithRatings, NewMovie},
};

#[derive(Clone)]
pub struct PgMovieStore {
    postgres: PgPool,
}

impl PgMovieStore {
    pub fn new(postgres: PgPool) -> Self {
        Self { postgres }
    }

    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        let postgres = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(config.database_url()?)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to connect to postgres: {}", e)))?;

        tracing::info!(
            "Connected to postgres (max {} connections)",
            config.max_connections
        );

        Ok(Self::new(postgres))
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn list_movies(&self) -> Result<Vec<MovieWithRatings>, AppError> {
        get::get_all_movies(&self.postgres).await
    }

    async fn search_movies(&self, name: &str) -> Result<Vec<MovieWithRatings>, AppError> {
        get::get_movies_by_name(name, &self.postgres).await
    }

    async fn get_movie(&self, id: i32) -> Result<Option<MovieWithRatings>, AppError> {
        get::get_movie_by_id(id, &self.postgres).await
    }

    async fn movie_exists(&self, id: i32) -> Result<bool, AppError> {
        get::movie_exists(id, &self.postgres).await
    }

    async fn create_movie(&self, movie: NewMovie) -> Result<Movie, AppError> {
        post::create_movie(movie, &self.postgres).await
    }

    async fn update_movie(&self, movie: Movie) -> Result<Option<Movie>, AppError> {
        put::update_movie(movie, &self.postgres).await
    }

    async fn delete_movie(&self, id: i32) -> Result<bool, AppError> {
        delete::delete_movie(id, &self.postgres).await
    }
}
