use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{article::ArticleId, votes::VoteDelta},
};

pub struct VoteArticleCommand {
    pub id: String,
    pub inc_votes: Option<i32>,
}

impl ArticleCommandService {
    pub async fn vote_article(&self, command: VoteArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::parse(&command.id)?;
        let delta = VoteDelta::new(command.inc_votes)?;
        let article = self.write_repo.apply_vote(id, delta).await?;
        tracing::info!(article_id = %id, delta = delta.value(), "vote applied");
        Ok(article.into())
    }
}
