// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_ARTICLE_TOPIC: &str = "articles_topic_fkey";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_fkey";
const CNT_COMMENT_ARTICLE: &str = "comments_article_id_fkey";
const CNT_COMMENT_AUTHOR: &str = "comments_author_fkey";

/// Classify a store failure by its SQLSTATE. Unmapped codes and
/// non-database errors are persistence failures.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                match constraint {
                    CNT_ARTICLE_TOPIC => return DomainError::NotFound("topic not found".into()),
                    CNT_ARTICLE_AUTHOR | CNT_COMMENT_AUTHOR => {
                        return DomainError::NotFound("author not found".into());
                    }
                    CNT_COMMENT_ARTICLE => {
                        return DomainError::NotFound("article not found".into());
                    }
                    _ => {}
                }
            }

            if let Some(code) = db_err.code() {
                if let Some(mapped) = classify_code(code.as_ref(), db_err.message()) {
                    return mapped;
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn classify_code(code: &str, message: &str) -> Option<DomainError> {
    match code {
        // numeric_value_out_of_range, foreign_key_violation
        "22003" | "23503" => Some(DomainError::NotFound(message.to_string())),
        // not_null_violation, invalid_text_representation, unique_violation
        "23502" | "22P02" | "23505" => Some(DomainError::Validation(message.to_string())),
        _ => None,
    }
}
