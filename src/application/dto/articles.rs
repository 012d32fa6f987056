use crate::domain::article::{Article, ArticleSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub article_id: i32,
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            article_id: article.id.into(),
            author: article.author.into_inner(),
            title: article.title.into_inner(),
            body: article.body.into_inner(),
            topic: article.topic.into_inner(),
            created_at: article.created_at,
            votes: article.votes,
            article_img_url: article.image_url.into_inner(),
            comment_count: article.comment_count,
        }
    }
}

/// Listing row; carries no `body`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub article_id: i32,
    pub author: String,
    pub title: String,
    pub topic: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

impl From<ArticleSummary> for ArticleSummaryDto {
    fn from(article: ArticleSummary) -> Self {
        Self {
            article_id: article.id.into(),
            author: article.author.into_inner(),
            title: article.title.into_inner(),
            topic: article.topic.into_inner(),
            created_at: article.created_at,
            votes: article.votes,
            article_img_url: article.image_url.into_inner(),
            comment_count: article.comment_count,
        }
    }
}
