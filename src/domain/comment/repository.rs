use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use crate::domain::votes::VoteDelta;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Comments of one article, newest first, windowed by `page`.
    async fn list_for_article(
        &self,
        article_id: ArticleId,
        page: PageRequest,
    ) -> DomainResult<Vec<Comment>>;

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;

    async fn apply_vote(&self, id: CommentId, delta: VoteDelta) -> DomainResult<Comment>;

    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}
