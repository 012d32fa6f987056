// src/presentation/http/controllers/comments.rs
use crate::application::commands::comments::{DeleteCommentCommand, VoteCommentCommand};
use crate::presentation::http::controllers::VoteRequest;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, PathParam};
use crate::presentation::http::openapi::CommentResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};

#[utoipa::path(
    patch,
    path = "/api/comments/{comment_id}",
    params(("comment_id" = String, Path, description = "Integer comment id")),
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Votes adjusted by inc_votes.", body = CommentResponse),
        (status = 400, description = "Bad id or inc_votes.", body = ErrorResponse),
        (status = 404, description = "No such comment.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn vote_comment(
    Extension(state): Extension<HttpState>,
    PathParam(comment_id): PathParam<String>,
    JsonBody(payload): JsonBody<VoteRequest>,
) -> HttpResult<Json<CommentResponse>> {
    let command = VoteCommentCommand {
        id: comment_id,
        inc_votes: payload.inc_votes,
    };

    state
        .services
        .comment_commands
        .vote_comment(command)
        .await
        .into_http()
        .map(|comment| Json(CommentResponse { comment }))
}

#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    params(("comment_id" = String, Path, description = "Integer comment id")),
    responses(
        (status = 204, description = "Comment removed."),
        (status = 400, description = "Id is not an integer.", body = ErrorResponse),
        (status = 404, description = "No such comment.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    PathParam(comment_id): PathParam<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_comment(DeleteCommentCommand { id: comment_id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
