// src/presentation/http/error.rs
//! The one place application failures become HTTP responses. Clients only
//! ever see a fixed message per status; details go to the log.
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MSG_BAD_REQUEST: &str = "Bad request";
pub const MSG_NOT_FOUND: &str = "Not found";
pub const MSG_INTERNAL: &str = "Internal server error";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    detail: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::bad_request(msg),
            ApplicationError::NotFound(msg) => Self::not_found(msg),
            ApplicationError::Domain(domain_err) => match domain_err {
                DomainError::Validation(msg) => Self::bad_request(msg),
                DomainError::NotFound(msg) => Self::not_found(msg),
                DomainError::Persistence(msg) => Self::internal(msg),
            },
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail.into())
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail.into())
    }

    fn new(status: StatusCode, detail: String) -> Self {
        Self { status, detail }
    }

    fn public_message(&self) -> &'static str {
        match self.status {
            StatusCode::BAD_REQUEST => MSG_BAD_REQUEST,
            StatusCode::NOT_FOUND => MSG_NOT_FOUND,
            _ => MSG_INTERNAL,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, detail = %self.detail, "request failed");
        } else {
            tracing::debug!(status = %self.status, detail = %self.detail, "request rejected");
        }

        let payload = ErrorResponse {
            msg: self.public_message().to_string(),
        };
        (self.status, Json(payload)).into_response()
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub msg: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

/// Fallback for unmatched routes.
pub async fn route_not_found() -> HttpError {
    HttpError::not_found("no route matched")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body;

    async fn body_of(err: HttpError) -> (StatusCode, serde_json::Value) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = body::to_bytes(resp.into_body(), 1024).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn domain_validation_is_bad_request() {
        let err = HttpError::from_error(DomainError::Validation("limit must be positive".into()).into());
        let (status, json) = body_of(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({ "msg": "Bad request" }));
    }

    #[tokio::test]
    async fn not_found_hides_detail() {
        let err = HttpError::from_error(ApplicationError::not_found("topic nope not found"));
        let (status, json) = body_of(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["msg"], "Not found");
    }

    #[tokio::test]
    async fn persistence_failures_are_internal_without_detail() {
        let err = HttpError::from_error(
            DomainError::Persistence("connection refused on 10.0.0.3".into()).into(),
        );
        let (status, json) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["msg"], "Internal server error");
    }
}
