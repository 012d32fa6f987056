use crate::application::commands::topics::CreateTopicCommand;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::openapi::{TopicListResponse, TopicResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTopicRequest {
    pub slug: Option<String>,
    pub description: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/topics",
    responses(
        (status = 200, description = "All topics.", body = TopicListResponse)
    ),
    tag = "Topics"
)]
pub async fn list_topics(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<TopicListResponse>> {
    let topics = state.services.topic_queries.list_topics().await.into_http()?;
    Ok(Json(TopicListResponse { topics }))
}

#[utoipa::path(
    post,
    path = "/api/topics",
    request_body = CreateTopicRequest,
    responses(
        (status = 201, description = "Topic created.", body = TopicResponse),
        (status = 400, description = "Missing slug or description, or slug taken.", body = ErrorResponse)
    ),
    tag = "Topics"
)]
pub async fn create_topic(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateTopicRequest>,
) -> HttpResult<(StatusCode, Json<TopicResponse>)> {
    let command = CreateTopicCommand {
        slug: payload.slug,
        description: payload.description,
    };

    let topic = state
        .services
        .topic_commands
        .create_topic(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(TopicResponse { topic })))
}
