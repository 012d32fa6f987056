// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationResult, required},
    },
    domain::{
        article::{ArticleBody, ArticleImageUrl, ArticleTitle, NewArticle},
        topic::TopicSlug,
        user::Username,
    },
};

#[derive(Debug, Default)]
pub struct CreateArticleCommand {
    pub author: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub topic: Option<String>,
    pub image_url: Option<String>,
}

impl ArticleCommandService {
    /// Insert an article. Unknown authors and topics surface from the store
    /// as foreign-key violations and map to not found.
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let author = Username::new(required(command.author, "author")?)?;
        let title = ArticleTitle::new(required(command.title, "title")?)?;
        let body = ArticleBody::new(required(command.body, "body")?)?;
        let topic = TopicSlug::new(required(command.topic, "topic")?)?;

        let new_article = NewArticle {
            author,
            title,
            body,
            topic,
            image_url: ArticleImageUrl::or_default(command.image_url),
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}
