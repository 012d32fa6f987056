// src/domain/mod.rs
pub mod article;
pub mod comment;
pub mod errors;
pub mod identifiers;
pub mod pagination;
pub mod topic;
pub mod user;
pub mod votes;
