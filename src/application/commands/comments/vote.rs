use super::CommentCommandService;
use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::{comment::CommentId, votes::VoteDelta},
};

pub struct VoteCommentCommand {
    pub id: String,
    pub inc_votes: Option<i32>,
}

impl CommentCommandService {
    pub async fn vote_comment(&self, command: VoteCommentCommand) -> ApplicationResult<CommentDto> {
        let id = CommentId::parse(&command.id)?;
        let delta = VoteDelta::new(command.inc_votes)?;
        let comment = self.comment_repo.apply_vote(id, delta).await?;
        tracing::info!(comment_id = %id, delta = delta.value(), "vote applied");
        Ok(comment.into())
    }
}
