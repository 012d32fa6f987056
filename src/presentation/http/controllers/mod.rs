// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod comments;
pub mod endpoints;
pub mod topics;
pub mod users;

use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `PATCH` vote endpoints. A missing or null `inc_votes` is rejected
/// by the command; a non-integer one by the JSON extractor.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VoteRequest {
    pub inc_votes: Option<i32>,
}
