use axum::http::StatusCode;
use serde::Serialize;

use crate::{
    db::MovieStore,
    errors::AppError,
    http::handlers::movie,
    models::{ApiRequest, ApiResponse},
};

/// Routes one request to exactly one handler and always produces a response.
///
/// GET precedence is fixed: `name` (search) before `id` (fetch) before list.
pub async fn dispatch(store: &dyn MovieStore, request: ApiRequest) -> ApiResponse {
    let id = request.path_parameter("id");
    let body = request.body.as_deref();

    match request.method.as_str() {
        "GET" => {
            if let Some(name) = request.path_parameter("name") {
                tracing::debug!("GET search by name '{}'", name);
                respond(StatusCode::OK, movie::search_movies(store, name).await)
            } else if let Some(id) = id {
                tracing::debug!("GET movie {}", id);
                respond(StatusCode::OK, movie::get_movie(store, id).await)
            } else {
                tracing::debug!("GET all movies");
                respond(StatusCode::OK, movie::list_movies(store).await)
            }
        }
        "POST" => respond(StatusCode::CREATED, movie::create_movie(store, body).await),
        "PUT" => respond(StatusCode::OK, movie::update_movie(store, id, body).await),
        "DELETE" => respond(StatusCode::OK, movie::delete_movie(store, id).await),
        other => {
            tracing::warn!("Rejected unsupported method {}", other);
            error_response(AppError::MethodNotAllowed)
        }
    }
}

fn respond<T: Serialize>(status: StatusCode, result: Result<T, AppError>) -> ApiResponse {
    let payload = result.and_then(|payload| {
        serde_json::to_string(&payload).map_err(|e| AppError::Serialization(e.to_string()))
    });

    match payload {
        Ok(body) => ApiResponse::json(status, body),
        Err(err) => error_response(err),
    }
}

fn error_response(err: AppError) -> ApiResponse {
    let (status, message) = err.to_response();

    if status.is_server_error() {
        tracing::error!("Request failed: {}", err);
    } else {
        tracing::warn!("Request rejected: {}", err);
    }

    match err {
        AppError::MethodNotAllowed => ApiResponse::plain(status, message),
        _ => ApiResponse::json(status, message),
    }
}
