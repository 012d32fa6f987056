use super::CommentCommandService;
use crate::{application::error::ApplicationResult, domain::comment::CommentId};

pub struct DeleteCommentCommand {
    pub id: String,
}

impl CommentCommandService {
    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<()> {
        let id = CommentId::parse(&command.id)?;
        self.comment_repo.delete(id).await?;
        tracing::info!(comment_id = %id, "comment deleted");
        Ok(())
    }
}
