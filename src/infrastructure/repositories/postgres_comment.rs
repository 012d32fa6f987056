// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::{Comment, CommentBody, CommentId, CommentRepository, NewComment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::user::Username;
use crate::domain::votes::VoteDelta;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    comment_id: i32,
    article_id: i32,
    author: String,
    body: String,
    votes: i32,
    created_at: NaiveDateTime,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.comment_id),
            article_id: ArticleId::new(row.article_id),
            author: Username::new(row.author)?,
            body: CommentBody::new(row.body)?,
            votes: row.votes,
            created_at: row.created_at.and_utc(),
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn list_for_article(
        &self,
        article_id: ArticleId,
        page: PageRequest,
    ) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT comment_id, article_id, author, body, votes, created_at
             FROM comments WHERE article_id = $1
             ORDER BY created_at DESC, comment_id DESC
             LIMIT $2 OFFSET $3",
        )
        .bind(i32::from(article_id))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            article_id,
            author,
            body,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (article_id, author, body, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING comment_id, article_id, author, body, votes, created_at",
        )
        .bind(i32::from(article_id))
        .bind(author.as_str())
        .bind(body.as_str())
        .bind(created_at.naive_utc())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn apply_vote(&self, id: CommentId, delta: VoteDelta) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            "UPDATE comments SET votes = votes + $1 WHERE comment_id = $2
             RETURNING comment_id, article_id, author, body, votes, created_at",
        )
        .bind(delta.value())
        .bind(i32::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.ok_or_else(|| DomainError::NotFound(format!("comment {id} not found")))
            .and_then(Comment::try_from)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(i32::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("comment {id} not found")));
        }
        Ok(())
    }
}
