use axum::{
    Router,
    routing::{any, post},
};

use crate::{
    http::handlers::{invoke_handler, movie_by_id_handler, movie_search_handler, movies_handler},
    state::AppState,
};

/// Every method is forwarded on the movie routes so the dispatcher decides
/// what is allowed.
pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/invoke", post(invoke_handler))
        .route("/movies", any(movies_handler))
        .route("/movies/{id}", any(movie_by_id_handler))
        .route("/movies/search/{name}", any(movie_search_handler))
        .with_state(state)
}
