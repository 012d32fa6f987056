// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleImageUrl, ArticleListing, ArticleReadRepository,
    ArticleSummary, ArticleTitle, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::TopicSlug;
use crate::domain::user::Username;
use crate::domain::votes::VoteDelta;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_WITH_COUNT: &str = "SELECT articles.article_id, articles.author, articles.title, articles.body, \
     articles.topic, articles.created_at, articles.votes, articles.article_img_url, \
     COUNT(comments.comment_id) AS comment_count \
     FROM articles LEFT JOIN comments ON comments.article_id = articles.article_id";

const SUMMARY_WITH_COUNT: &str = "SELECT articles.article_id, articles.author, articles.title, \
     articles.topic, articles.created_at, articles.votes, articles.article_img_url, \
     COUNT(comments.comment_id) AS comment_count \
     FROM articles LEFT JOIN comments ON comments.article_id = articles.article_id";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    article_id: i32,
    author: String,
    title: String,
    body: String,
    topic: String,
    created_at: NaiveDateTime,
    votes: i32,
    article_img_url: Option<String>,
    comment_count: i64,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.article_id),
            author: Username::new(row.author)?,
            title: ArticleTitle::new(row.title)?,
            body: ArticleBody::new(row.body)?,
            topic: TopicSlug::new(row.topic)?,
            created_at: row.created_at.and_utc(),
            votes: row.votes,
            image_url: ArticleImageUrl::or_default(row.article_img_url),
            comment_count: row.comment_count,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleSummaryRow {
    article_id: i32,
    author: String,
    title: String,
    topic: String,
    created_at: NaiveDateTime,
    votes: i32,
    article_img_url: Option<String>,
    comment_count: i64,
}

impl TryFrom<ArticleSummaryRow> for ArticleSummary {
    type Error = DomainError;

    fn try_from(row: ArticleSummaryRow) -> Result<Self, Self::Error> {
        Ok(ArticleSummary {
            id: ArticleId::new(row.article_id),
            author: Username::new(row.author)?,
            title: ArticleTitle::new(row.title)?,
            topic: TopicSlug::new(row.topic)?,
            created_at: row.created_at.and_utc(),
            votes: row.votes,
            image_url: ArticleImageUrl::or_default(row.article_img_url),
            comment_count: row.comment_count,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            author,
            title,
            body,
            topic,
            image_url,
            created_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (author, title, body, topic, article_img_url, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING article_id, author, title, body, topic, created_at, votes, article_img_url,
                       0::INT8 AS comment_count",
        )
        .bind(author.as_str())
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(topic.as_str())
        .bind(image_url.as_str())
        .bind(created_at.naive_utc())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn apply_vote(&self, id: ArticleId, delta: VoteDelta) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles SET votes = votes + $1 WHERE article_id = $2
             RETURNING article_id, author, title, body, topic, created_at, votes, article_img_url,
                       (SELECT COUNT(*) FROM comments WHERE comments.article_id = articles.article_id)
                           AS comment_count",
        )
        .bind(delta.value())
        .bind(i32::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = row.ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))?;
        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM comments WHERE article_id = $1")
            .bind(i32::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let result = sqlx::query("DELETE FROM articles WHERE article_id = $1")
            .bind(i32::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("article {id} not found")));
        }

        tx.commit().await.map_err(map_sqlx)
    }
}

impl PostgresArticleReadRepository {
    /// `WHERE` for the optional topic filter. The slug is always bound.
    fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, listing: &'a ArticleListing) {
        if let Some(topic) = &listing.topic {
            builder.push(" WHERE articles.topic = ");
            builder.push_bind(topic.as_str());
        }
    }

    /// Only the allow-listed identifiers of `ArticleSortColumn` and
    /// `SortOrder` are pushed as raw SQL here.
    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, listing: &ArticleListing) {
        let direction = listing.order.as_sql();
        builder.push(" ORDER BY articles.");
        builder.push(listing.sort_by.as_column());
        builder.push(" ");
        builder.push(direction);
        builder.push(", articles.article_id ");
        builder.push(direction);
    }

    /// Full listing statement; only the topic, limit and offset are bound.
    fn listing_query(listing: &ArticleListing) -> QueryBuilder<'_, Postgres> {
        let mut builder = QueryBuilder::new(SUMMARY_WITH_COUNT);
        Self::apply_filter(&mut builder, listing);
        builder.push(" GROUP BY articles.article_id");
        Self::apply_ordering(&mut builder, listing);
        builder.push(" LIMIT ");
        builder.push_bind(listing.page.limit());
        builder.push(" OFFSET ");
        builder.push_bind(listing.page.offset());
        builder
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql =
            format!("{ARTICLE_WITH_COUNT} WHERE articles.article_id = $1 GROUP BY articles.article_id");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i32::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, listing: &ArticleListing) -> DomainResult<Vec<ArticleSummary>> {
        let mut builder = Self::listing_query(listing);
        tracing::debug!(sql = builder.sql(), "listing articles");

        let rows = builder
            .build_query_as::<ArticleSummaryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleSummary::try_from).collect()
    }

    async fn exists(&self, id: ArticleId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM articles WHERE article_id = $1)")
            .bind(i32::from(id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}
