use axum::{
    Json,
    extract::{Path, State},
    http::Method,
};

use crate::{
    http::dispatcher::dispatch,
    models::{ApiRequest, ApiResponse},
    state::AppState,
};

fn rest_request(method: Method, body: String) -> ApiRequest {
    let request = ApiRequest::new(method.as_str());
    if body.is_empty() {
        request
    } else {
        request.with_body(body)
    }
}

/// Runtime-style entry point: the event comes in as JSON and the response
/// envelope goes back as JSON.
pub async fn invoke_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiRequest>,
) -> Json<ApiResponse> {
    Json(dispatch(state.store.as_ref(), request).await)
}

pub async fn movies_handler(
    State(state): State<AppState>,
    method: Method,
    body: String,
) -> ApiResponse {
    dispatch(state.store.as_ref(), rest_request(method, body)).await
}

pub async fn movie_by_id_handler(
    State(state): State<AppState>,
    method: Method,
    Path(id): Path<String>,
    body: String,
) -> ApiResponse {
    let request = rest_request(method, body).with_path_parameter("id", id);
    dispatch(state.store.as_ref(), request).await
}

pub async fn movie_search_handler(
    State(state): State<AppState>,
    method: Method,
    Path(name): Path<String>,
    body: String,
) -> ApiResponse {
    let request = rest_request(method, body).with_path_parameter("name", name);
    dispatch(state.store.as_ref(), request).await
}
