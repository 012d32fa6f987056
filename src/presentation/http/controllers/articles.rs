// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::{
        articles::{CreateArticleCommand, DeleteArticleCommand, VoteArticleCommand},
        comments::CreateCommentCommand,
    },
    queries::articles::{GetArticleByIdQuery, ListArticleCommentsQuery, ListArticlesQuery},
};
use crate::presentation::http::controllers::VoteRequest;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, PathParam, QueryParams};
use crate::presentation::http::openapi::{
    ArticleListResponse, ArticleResponse, CommentListResponse, CommentResponse,
};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Topic slug to filter by.
    pub topic: Option<String>,
    /// One of `title`, `topic`, `author`, `votes`, `created_at` (default).
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default).
    pub order: Option<String>,
    /// Page size, positive integer, default 10.
    pub limit: Option<String>,
    /// Page number, positive integer, default 1.
    pub p: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentListParams {
    /// Page size, positive integer, default 10.
    pub limit: Option<String>,
    /// Page number, positive integer, default 1.
    pub p: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub author: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub topic: Option<String>,
    #[serde(alias = "image_url")]
    pub article_img_url: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    pub username: Option<String>,
    pub body: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles without bodies, newest first by default.", body = ArticleListResponse),
        (status = 400, description = "Invalid sort, order or paging value.", body = ErrorResponse),
        (status = 404, description = "Topic does not exist.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    let query = ListArticlesQuery {
        topic: params.topic,
        sort_by: params.sort_by,
        order: params.order,
        limit: params.limit,
        page: params.p,
    };

    let articles = state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()?;

    Ok(Json(ArticleListResponse { articles }))
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleResponse),
        (status = 400, description = "Missing required field.", body = ErrorResponse),
        (status = 404, description = "Author or topic does not exist.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleResponse>)> {
    let command = CreateArticleCommand {
        author: payload.author,
        title: payload.title,
        body: payload.body,
        topic: payload.topic,
        image_url: payload.article_img_url,
    };

    let article = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(ArticleResponse { article })))
}

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    params(("article_id" = String, Path, description = "Integer article id")),
    responses(
        (status = 200, description = "Article with comment_count.", body = ArticleResponse),
        (status = 400, description = "Id is not an integer.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    PathParam(article_id): PathParam<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: article_id })
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}",
    params(("article_id" = String, Path, description = "Integer article id")),
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Votes adjusted by inc_votes.", body = ArticleResponse),
        (status = 400, description = "Bad id or inc_votes.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn vote_article(
    Extension(state): Extension<HttpState>,
    PathParam(article_id): PathParam<String>,
    JsonBody(payload): JsonBody<VoteRequest>,
) -> HttpResult<Json<ArticleResponse>> {
    let command = VoteArticleCommand {
        id: article_id,
        inc_votes: payload.inc_votes,
    };

    state
        .services
        .article_commands
        .vote_article(command)
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

#[utoipa::path(
    delete,
    path = "/api/articles/{article_id}",
    params(("article_id" = String, Path, description = "Integer article id")),
    responses(
        (status = 204, description = "Article and its comments removed."),
        (status = 400, description = "Id is not an integer.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    PathParam(article_id): PathParam<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id: article_id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    params(
        ("article_id" = String, Path, description = "Integer article id"),
        CommentListParams
    ),
    responses(
        (status = 200, description = "Comments, newest first.", body = CommentListResponse),
        (status = 400, description = "Bad id or paging value.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_article_comments(
    Extension(state): Extension<HttpState>,
    PathParam(article_id): PathParam<String>,
    QueryParams(params): QueryParams<CommentListParams>,
) -> HttpResult<Json<CommentListResponse>> {
    let query = ListArticleCommentsQuery {
        article_id,
        limit: params.limit,
        page: params.p,
    };

    let comments = state
        .services
        .article_queries
        .list_comments(query)
        .await
        .into_http()?;

    Ok(Json(CommentListResponse { comments }))
}

#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    params(("article_id" = String, Path, description = "Integer article id")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created; unknown fields ignored.", body = CommentResponse),
        (status = 400, description = "Bad id or missing username/body.", body = ErrorResponse),
        (status = 404, description = "Article or user does not exist.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article_comment(
    Extension(state): Extension<HttpState>,
    PathParam(article_id): PathParam<String>,
    JsonBody(payload): JsonBody<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentResponse>)> {
    let command = CreateCommentCommand {
        article_id,
        username: payload.username,
        body: payload.body,
    };

    let comment = state
        .services
        .comment_commands
        .create_comment(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}
