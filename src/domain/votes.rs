// src/domain/votes.rs
use crate::domain::errors::{DomainError, DomainResult};

/// Signed amount added to a stored vote counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteDelta(i32);

impl VoteDelta {
    pub fn new(value: Option<i32>) -> DomainResult<Self> {
        value
            .map(Self)
            .ok_or_else(|| DomainError::Validation("inc_votes is required".into()))
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl From<VoteDelta> for i32 {
    fn from(value: VoteDelta) -> Self {
        value.0
    }
}
