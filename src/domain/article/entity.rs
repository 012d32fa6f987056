// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleId, ArticleImageUrl, ArticleTitle,
};
use crate::domain::topic::TopicSlug;
use crate::domain::user::Username;
use chrono::{DateTime, Utc};

/// Full article as returned by single-article reads and mutations.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub author: Username,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub topic: TopicSlug,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub image_url: ArticleImageUrl,
    pub comment_count: i64,
}

/// Listing projection: everything but the body.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub author: Username,
    pub title: ArticleTitle,
    pub topic: TopicSlug,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub image_url: ArticleImageUrl,
    pub comment_count: i64,
}

impl From<Article> for ArticleSummary {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            author: article.author,
            title: article.title,
            topic: article.topic,
            created_at: article.created_at,
            votes: article.votes,
            image_url: article.image_url,
            comment_count: article.comment_count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub author: Username,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub topic: TopicSlug,
    pub image_url: ArticleImageUrl,
    pub created_at: DateTime<Utc>,
}
