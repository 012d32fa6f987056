use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identifiers::parse_row_key;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(i32);

impl CommentId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Parse a `:comment_id` path segment.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        parse_row_key(raw, "comment").map(Self)
    }
}

impl From<CommentId> for i32 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("comment body cannot be empty".into()));
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
