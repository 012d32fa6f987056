// src/domain/article/listing.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::topic::TopicSlug;
use std::str::FromStr;

/// Columns an article listing may be ordered by.
///
/// Column identifiers cannot be bound as query parameters, so this enum is
/// the only source of text written into an `ORDER BY` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSortColumn {
    Title,
    Topic,
    Author,
    Votes,
    #[default]
    CreatedAt,
}

impl ArticleSortColumn {
    pub const fn as_column(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Topic => "topic",
            Self::Author => "author",
            Self::Votes => "votes",
            Self::CreatedAt => "created_at",
        }
    }
}

impl FromStr for ArticleSortColumn {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "title" => Ok(Self::Title),
            "topic" => Ok(Self::Topic),
            "author" => Ok(Self::Author),
            "votes" => Ok(Self::Votes),
            "created_at" => Ok(Self::CreatedAt),
            other => Err(DomainError::Validation(format!(
                "cannot sort articles by {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(DomainError::Validation(format!(
                "order must be asc or desc, got {other:?}"
            ))),
        }
    }
}

/// Validated article listing request.
#[derive(Debug, Clone, Default)]
pub struct ArticleListing {
    pub topic: Option<TopicSlug>,
    pub sort_by: ArticleSortColumn,
    pub order: SortOrder,
    pub page: PageRequest,
}

impl ArticleListing {
    /// Validate raw query-string inputs. Fails before any store access when
    /// a value is outside its allow-list or not a positive integer.
    pub fn parse(
        topic: Option<&str>,
        sort_by: Option<&str>,
        order: Option<&str>,
        limit: Option<&str>,
        page: Option<&str>,
    ) -> DomainResult<Self> {
        let sort_by = sort_by
            .map(str::parse::<ArticleSortColumn>)
            .transpose()?
            .unwrap_or_default();
        let order = order
            .map(str::parse::<SortOrder>)
            .transpose()?
            .unwrap_or_default();
        let page = PageRequest::parse(limit, page)?;
        let topic = topic
            .filter(|slug| !slug.trim().is_empty())
            .map(TopicSlug::new)
            .transpose()?;

        Ok(Self {
            topic,
            sort_by,
            order,
            page,
        })
    }
}
