use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleSummaryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleListing,
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub topic: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

impl ArticleQueryService {
    /// List articles with optional topic filter, ordering and paging.
    ///
    /// An empty result with a topic filter triggers one extra lookup to tell
    /// a topic without articles (empty list) from an unknown topic
    /// (not found). Non-empty results never pay for that lookup.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let listing = ArticleListing::parse(
            query.topic.as_deref(),
            query.sort_by.as_deref(),
            query.order.as_deref(),
            query.limit.as_deref(),
            query.page.as_deref(),
        )?;

        let articles = self.read_repo.list(&listing).await?;

        if articles.is_empty() {
            if let Some(topic) = &listing.topic {
                if !self.topic_repo.exists(topic).await? {
                    return Err(ApplicationError::not_found(format!(
                        "topic {topic} not found"
                    )));
                }
            }
        }

        Ok(articles.into_iter().map(Into::into).collect())
    }
}
