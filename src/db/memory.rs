use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use tokio::sync::Mutex;

use crate::{
    db::store::MovieStore,
    errors::AppError,
    models::{Movie, MovieWithRatings, NewMovie, User, UserMovieRating},
};

#[derive(Debug)]
struct Tables {
    movies: BTreeMap<i32, Movie>,
    users: HashSet<String>,
    ratings: Vec<UserMovieRating>,
    next_id: i32,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            movies: BTreeMap::new(),
            users: HashSet::new(),
            ratings: Vec::new(),
            next_id: 1,
        }
    }
}

impl Tables {
    fn with_ratings(&self, movie: &Movie) -> MovieWithRatings {
        MovieWithRatings {
            movie: movie.clone(),
            ratings: self
                .ratings
                .iter()
                .filter(|r| r.movie_id == movie.id)
                .map(|r| r.rating)
                .collect(),
        }
    }

    /// Next free id at or above `next_id`. Fails once `i32::MAX` is taken.
    fn allocate_id(&mut self) -> Result<i32, AppError> {
        let mut id = self.next_id;
        while self.movies.contains_key(&id) {
            id = id
                .checked_add(1)
                .ok_or_else(|| AppError::Conflict("No movie ids left to assign".into()))?;
        }
        self.next_id = id.saturating_add(1);
        Ok(id)
    }
}

/// Process-local store with the same relational rules as the Postgres
/// schema: ratings must reference an existing user and movie, and go away
/// with their movie.
#[derive(Debug, Default)]
pub struct MemoryMovieStore {
    tables: Mutex<Tables>,
}

impl MemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_user(&self, user: User) -> Result<(), AppError> {
        let mut tables = self.tables.lock().await;
        if !tables.users.insert(user.id.clone()) {
            return Err(AppError::Conflict(format!(
                "User with id {} already exists",
                user.id
            )));
        }
        Ok(())
    }

    pub async fn add_rating(&self, rating: UserMovieRating) -> Result<(), AppError> {
        let mut tables = self.tables.lock().await;

        if !tables.users.contains(&rating.user_id) {
            return Err(AppError::BadRequest(format!(
                "Rating references unknown user {}",
                rating.user_id
            )));
        }
        if !tables.movies.contains_key(&rating.movie_id) {
            return Err(AppError::BadRequest(format!(
                "Rating references unknown movie {}",
                rating.movie_id
            )));
        }

        tables.ratings.push(rating);
        Ok(())
    }

    pub async fn rating_count(&self) -> usize {
        self.tables.lock().await.ratings.len()
    }
}

#[async_trait]
impl MovieStore for MemoryMovieStore {
    async fn list_movies(&self) -> Result<Vec<MovieWithRatings>, AppError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .movies
            .values()
            .map(|m| tables.with_ratings(m))
            .collect())
    }

    async fn search_movies(&self, name: &str) -> Result<Vec<MovieWithRatings>, AppError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .movies
            .values()
            .filter(|m| m.name.contains(name))
            .map(|m| tables.with_ratings(m))
            .collect())
    }

    async fn get_movie(&self, id: i32) -> Result<Option<MovieWithRatings>, AppError> {
        let tables = self.tables.lock().await;
        Ok(tables.movies.get(&id).map(|m| tables.with_ratings(m)))
    }

    async fn movie_exists(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.tables.lock().await.movies.contains_key(&id))
    }

    async fn create_movie(&self, movie: NewMovie) -> Result<Movie, AppError> {
        let mut tables = self.tables.lock().await;

        let id = match movie.id {
            Some(id) if tables.movies.contains_key(&id) => {
                return Err(AppError::Conflict(format!(
                    "Movie with id {} already exists",
                    id
                )));
            }
            Some(id) => {
                tables.next_id = tables.next_id.max(id.saturating_add(1));
                id
            }
            None => tables.allocate_id()?,
        };

        let created = movie.with_id(id);
        tables.movies.insert(id, created.clone());
        Ok(created)
    }

    async fn update_movie(&self, movie: Movie) -> Result<Option<Movie>, AppError> {
        let mut tables = self.tables.lock().await;
        match tables.movies.get_mut(&movie.id) {
            Some(existing) => {
                *existing = movie.clone();
                Ok(Some(movie))
            }
            None => Ok(None),
        }
    }

    async fn delete_movie(&self, id: i32) -> Result<bool, AppError> {
        let mut tables = self.tables.lock().await;
        if tables.movies.remove(&id).is_none() {
            return Ok(false);
        }
        tables.ratings.retain(|r| r.movie_id != id);
        Ok(true)
    }
}
