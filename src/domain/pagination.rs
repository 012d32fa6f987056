// src/domain/pagination.rs
use crate::domain::errors::{DomainError, DomainResult};

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const FIRST_PAGE: i64 = 1;

/// Offset pagination window: page `p` of size `limit` covers rows
/// `[(p - 1) * limit, p * limit)` of the ordered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: i64,
    page: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            page: FIRST_PAGE,
        }
    }
}

impl PageRequest {
    pub fn new(limit: i64, page: i64) -> DomainResult<Self> {
        if limit <= 0 {
            return Err(DomainError::Validation("limit must be positive".into()));
        }
        if page <= 0 {
            return Err(DomainError::Validation("page must be positive".into()));
        }
        let request = Self { limit, page };
        request.checked_offset()?;
        Ok(request)
    }

    /// Build a window from raw query-string values, applying defaults for
    /// absent ones.
    pub fn parse(limit: Option<&str>, page: Option<&str>) -> DomainResult<Self> {
        let limit = parse_positive(limit, "limit", DEFAULT_PAGE_SIZE)?;
        let page = parse_positive(page, "p", FIRST_PAGE)?;
        Self::new(limit, page)
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        // validated in `new`
        (self.page - 1) * self.limit
    }

    fn checked_offset(&self) -> DomainResult<i64> {
        (self.page - 1)
            .checked_mul(self.limit)
            .ok_or_else(|| DomainError::Validation("page offset out of range".into()))
    }

    /// Slice an already ordered sequence the way the store applies
    /// `LIMIT`/`OFFSET`.
    pub fn window<T>(&self, items: Vec<T>) -> Vec<T> {
        let skip = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(self.limit).unwrap_or(usize::MAX);
        items.into_iter().skip(skip).take(take).collect()
    }
}

fn parse_positive(raw: Option<&str>, name: &str, default: i64) -> DomainResult<i64> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<i64>()
            .map_err(|_| DomainError::Validation(format!("{name} must be an integer"))),
    }
}
