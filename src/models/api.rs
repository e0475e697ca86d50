use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Inbound invocation event, as handed over by the hosting runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    pub method: String,
    pub path_parameters: Option<HashMap<String, String>>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Default::default()
        }
    }

    pub fn with_path_parameter(mut self, key: &str, value: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(key.to_string(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn path_parameter(&self, key: &str) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get(key))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
}

impl ApiResponse {
    pub fn json(status: StatusCode, body: String) -> Self {
        Self {
            status_code: status.as_u16(),
            body,
            headers: HashMap::from([("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string())]),
        }
    }

    pub fn plain(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            body: body.into(),
            headers: HashMap::new(),
        }
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("Content-Type").map(String::as_str)
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;

        let headers = response.headers_mut();
        for (key, value) in self.headers {
            match (
                HeaderName::try_from(key.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!("Dropping invalid response header: {}", key),
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case_event_fields() {
        let raw = r#"{"method":"GET","pathParameters":{"id":"7"}}"#;
        let request: ApiRequest = serde_json::from_str(raw).unwrap();

        assert_eq!(request.method, "GET");
        assert_eq!(request.path_parameter("id"), Some("7"));
        assert_eq!(request.path_parameter("name"), None);
        assert!(request.body.is_none());
    }

    #[test]
    fn plain_response_omits_headers() {
        let response = ApiResponse::plain(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["statusCode"], 405);
        assert!(value.get("headers").is_none());
    }

    #[test]
    fn json_response_sets_content_type() {
        let response = ApiResponse::json(StatusCode::OK, "[]".into());
        assert_eq!(response.content_type(), Some(JSON_CONTENT_TYPE));

        let http = response.into_response();
        assert_eq!(http.status(), StatusCode::OK);
        assert_eq!(http.headers()["content-type"], JSON_CONTENT_TYPE);
    }
}
