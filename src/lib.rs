pub mod config;
pub mod db;
pub mod errors;
pub mod http;
mod middleware;
pub mod models;
pub mod state;

use axum::{Router, http::StatusCode, middleware as axum_middleware};
use config::{Config, StoreKind};
use db::{MemoryMovieStore, MovieStore, PgMovieStore};
use errors::AppError;
use middleware::{cors_layer, create_global_rate_limiter, rate_limit_middleware};
use state::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;

pub use http::{create_http_routes, dispatch};

pub async fn build_store(config: &Config) -> Result<Arc<dyn MovieStore>, AppError> {
    match config.store {
        StoreKind::Postgres => Ok(Arc::new(PgMovieStore::connect(config).await?)),
        StoreKind::Memory => {
            tracing::warn!("Using in-memory movie store, data is lost on restart");
            Ok(Arc::new(MemoryMovieStore::new()))
        }
    }
}

/// Movie routes wrapped in rate limiting, CORS and tracing, with a 404
/// fallback for every other path.
pub fn build_app(state: AppState, config: &Config) -> Router {
    let global_rate_limiter = create_global_rate_limiter(config.rate_limit_per_minute);

    Router::new()
        .merge(create_http_routes(state))
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(global_rate_limiter.clone(), req, next)
        }))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
}

pub async fn start_server() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::load();
    let state = AppState::new(build_store(&config).await?);
    let app = build_app(state, &config);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(|e| AppError::EnvError(format!("Failed to bind port {}: {}", config.port, e)))?;

    tracing::info!("Movie catalog running at http://0.0.0.0:{}/movies", config.port);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Server error: {}", e);
        AppError::InternalError
    })
}
