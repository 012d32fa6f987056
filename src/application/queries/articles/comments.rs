use super::ArticleQueryService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleId, pagination::PageRequest},
};

pub struct ListArticleCommentsQuery {
    pub article_id: String,
    pub limit: Option<String>,
    pub page: Option<String>,
}

impl ArticleQueryService {
    /// Comments of one article, newest first. An empty page is only an error
    /// when the article itself does not exist.
    pub async fn list_comments(
        &self,
        query: ListArticleCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let article_id = ArticleId::parse(&query.article_id)?;
        let page = PageRequest::parse(query.limit.as_deref(), query.page.as_deref())?;

        let comments = self.comment_repo.list_for_article(article_id, page).await?;

        if comments.is_empty() && !self.read_repo.exists(article_id).await? {
            return Err(ApplicationError::not_found(format!(
                "article {article_id} not found"
            )));
        }

        Ok(comments.into_iter().map(Into::into).collect())
    }
}
