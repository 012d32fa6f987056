use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identifiers::parse_row_key;
use std::fmt;

pub const DEFAULT_ARTICLE_IMG_URL: &str =
    "https://images.pexels.com/photos/97050/pexels-photo-97050.jpeg?w=700&h=700";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(i32);

impl ArticleId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Parse an `:article_id` path segment.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        parse_row_key(raw, "article").map(Self)
    }
}

impl From<ArticleId> for i32 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleBody(String);

impl ArticleBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("body cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleImageUrl(String);

impl ArticleImageUrl {
    /// Blank or absent urls fall back to [`DEFAULT_ARTICLE_IMG_URL`].
    pub fn or_default(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => Self(url),
            _ => Self(DEFAULT_ARTICLE_IMG_URL.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for ArticleImageUrl {
    fn from(value: String) -> Self {
        Self(value)
    }
}
