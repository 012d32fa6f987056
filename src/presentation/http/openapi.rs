// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, ArticleSummaryDto, CommentDto, TopicDto, UserDto};
use axum::Router;
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub article: ArticleDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleSummaryDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub comment: CommentDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentListResponse {
    pub comments: Vec<CommentDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopicResponse {
    pub topic: TopicDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopicListResponse {
    pub topics: Vec<TopicDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user: UserDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<UserDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EndpointsResponse {
    #[schema(value_type = Object)]
    pub endpoints: serde_json::Value,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::endpoints::get_endpoints,
        crate::presentation::http::controllers::topics::list_topics,
        crate::presentation::http::controllers::topics::create_topic,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::vote_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::list_article_comments,
        crate::presentation::http::controllers::articles::create_article_comment,
        crate::presentation::http::controllers::comments::vote_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::users::list_users,
        crate::presentation::http::controllers::users::get_user,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleResponse,
            ArticleListResponse,
            CommentResponse,
            CommentListResponse,
            TopicResponse,
            TopicListResponse,
            UserResponse,
            UserListResponse,
            EndpointsResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::CreateCommentRequest,
            crate::presentation::http::controllers::VoteRequest,
            crate::presentation::http::controllers::topics::CreateTopicRequest,
            ArticleDto,
            ArticleSummaryDto,
            CommentDto,
            TopicDto,
            UserDto
        )
    ),
    tags(
        (name = "Articles", description = "Article listing, reads and mutations"),
        (name = "Comments", description = "Comment mutations"),
        (name = "Topics", description = "Topic endpoints"),
        (name = "Users", description = "Read-only user endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Newsboard API",
        description = "News and discussion backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let doc = ApiDoc::openapi();
    let output_path = snapshot_path();
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string())
}
