use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationResult, required},
    },
    domain::{
        article::ArticleId,
        comment::{CommentBody, NewComment},
        user::Username,
    },
};

pub struct CreateCommentCommand {
    pub article_id: String,
    pub username: Option<String>,
    pub body: Option<String>,
}

impl CommentCommandService {
    pub async fn create_comment(&self, command: CreateCommentCommand) -> ApplicationResult<CommentDto> {
        let article_id = ArticleId::parse(&command.article_id)?;
        let author = Username::new(required(command.username, "username")?)?;
        let body = CommentBody::new(required(command.body, "body")?)?;

        let comment = self
            .comment_repo
            .insert(NewComment {
                article_id,
                author,
                body,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(comment_id = %comment.id, %article_id, "comment created");
        Ok(comment.into())
    }
}
