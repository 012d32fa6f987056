// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, comments, endpoints, topics, users};
use crate::presentation::http::error::route_not_found;
use crate::presentation::http::openapi::{self, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, patch},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api", get(endpoints::get_endpoints))
        .route(
            "/api/topics",
            get(topics::list_topics).post(topics::create_topic),
        )
        .route(
            "/api/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/articles/{article_id}",
            get(articles::get_article)
                .patch(articles::vote_article)
                .delete(articles::delete_article),
        )
        .route(
            "/api/articles/{article_id}/comments",
            get(articles::list_article_comments).post(articles::create_article_comment),
        )
        .route(
            "/api/comments/{comment_id}",
            patch(comments::vote_comment).delete(comments::delete_comment),
        )
        .route("/api/users", get(users::list_users))
        .route("/api/users/{username}", get(users::get_user))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

/// `*` anywhere in the list opens CORS to every origin; otherwise only the
/// listed origins that parse as header values are allowed.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring unparsable CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
