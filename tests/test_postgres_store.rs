#![cfg(feature = "postgres-tests")]

use movie_catalog::{
    db::{MovieStore, PgMovieStore},
    dispatch,
    errors::AppError,
    models::{ApiRequest, Movie, NewMovie},
};
use serde_json::{Value, json};
use sqlx::PgPool;

fn new_movie(id: Option<i32>, name: &str) -> NewMovie {
    NewMovie {
        id,
        name: name.into(),
        genre: None,
        release_year: None,
    }
}

async fn rate(pool: &PgPool, user_id: &str, movie_id: i32, rating: i32) {
    sqlx::query("INSERT INTO users (id) VALUES ($1) ON CONFLICT DO NOTHING")
        .bind(user_id)
        .execute(pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO user_movie_ratings (user_id, movie_id, rating) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(movie_id)
        .bind(rating)
        .execute(pool)
        .await
        .unwrap();
}

#[sqlx::test(migrations = "./sql")]
async fn test_ratings_aggregate_with_empty_default(pool: PgPool) {
    let store = PgMovieStore::new(pool.clone());
    store.create_movie(new_movie(Some(1), "Matrix")).await.unwrap();
    store.create_movie(new_movie(Some(2), "Alien")).await.unwrap();
    rate(&pool, "neo", 1, 5).await;
    rate(&pool, "trinity", 1, 4).await;
    rate(&pool, "neo", 1, 5).await;

    let movies = store.list_movies().await.unwrap();
    assert_eq!(movies.len(), 2);

    let mut matrix = movies[0].ratings.clone();
    matrix.sort();
    assert_eq!(movies[0].movie.id, 1);
    assert_eq!(matrix, vec![4, 5, 5]);
    assert_eq!(movies[1].ratings, Vec::<i32>::new());

    let alien = store.get_movie(2).await.unwrap().unwrap();
    assert!(alien.ratings.is_empty());
    assert!(store.get_movie(3).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./sql")]
async fn test_search_is_literal_and_case_sensitive(pool: PgPool) {
    let store = PgMovieStore::new(pool);
    for name in ["100% Wolf", "Matrix", "The Matrix_Revisited"] {
        store.create_movie(new_movie(None, name)).await.unwrap();
    }

    let names = |found: Vec<movie_catalog::models::MovieWithRatings>| {
        found.into_iter().map(|m| m.movie.name).collect::<Vec<_>>()
    };

    assert_eq!(names(store.search_movies("%").await.unwrap()), vec!["100% Wolf"]);
    assert_eq!(
        names(store.search_movies("_").await.unwrap()),
        vec!["The Matrix_Revisited"]
    );
    assert_eq!(
        names(store.search_movies("Matrix").await.unwrap()),
        vec!["Matrix", "The Matrix_Revisited"]
    );
    assert!(store.search_movies("matrix").await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./sql")]
async fn test_explicit_id_advances_identity(pool: PgPool) {
    let store = PgMovieStore::new(pool);

    let explicit = store.create_movie(new_movie(Some(10), "Ten")).await.unwrap();
    let generated = store.create_movie(new_movie(None, "Next")).await.unwrap();

    assert_eq!(explicit.id, 10);
    assert_eq!(generated.id, 11);
}

#[sqlx::test(migrations = "./sql")]
async fn test_duplicate_id_is_conflict(pool: PgPool) {
    let store = PgMovieStore::new(pool);
    store.create_movie(new_movie(Some(1), "Matrix")).await.unwrap();

    let result = store.create_movie(new_movie(Some(1), "Impostor")).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(store.get_movie(1).await.unwrap().unwrap().movie.name, "Matrix");
}

#[sqlx::test(migrations = "./sql")]
async fn test_update_and_delete(pool: PgPool) {
    let store = PgMovieStore::new(pool.clone());
    store.create_movie(new_movie(Some(1), "Matrix")).await.unwrap();
    rate(&pool, "neo", 1, 5).await;

    let replacement = Movie {
        id: 1,
        name: "Matrix Reloaded".into(),
        genre: Some("Sci-Fi".into()),
        release_year: Some(2003),
    };
    assert_eq!(
        store.update_movie(replacement.clone()).await.unwrap(),
        Some(replacement.clone())
    );
    assert_eq!(
        store
            .update_movie(Movie { id: 2, ..replacement })
            .await
            .unwrap(),
        None
    );
    assert!(!store.movie_exists(2).await.unwrap());

    assert!(store.delete_movie(1).await.unwrap());
    assert!(!store.delete_movie(1).await.unwrap());

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_movie_ratings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[sqlx::test(migrations = "./sql")]
async fn test_dispatch_scenario_against_postgres(pool: PgPool) {
    let store = PgMovieStore::new(pool);

    let created = dispatch(
        &store,
        ApiRequest::new("POST").with_body(json!({ "id": 1, "name": "Matrix" }).to_string()),
    )
    .await;
    assert_eq!(created.status_code, 201);

    let duplicate = dispatch(
        &store,
        ApiRequest::new("POST").with_body(json!({ "id": 1, "name": "Again" }).to_string()),
    )
    .await;
    assert_eq!(duplicate.status_code, 409);

    let updated = dispatch(
        &store,
        ApiRequest::new("PUT")
            .with_path_parameter("id", "1")
            .with_body(json!({ "id": 99, "name": "Matrix Reloaded" }).to_string()),
    )
    .await;
    let body: Value = serde_json::from_str(&updated.body).unwrap();
    assert_eq!(body["id"], 1);

    let deleted = dispatch(&store, ApiRequest::new("DELETE").with_path_parameter("id", "1")).await;
    assert_eq!(deleted.status_code, 200);

    let fetched = dispatch(&store, ApiRequest::new("GET").with_path_parameter("id", "1")).await;
    assert_eq!(fetched.status_code, 404);
}
