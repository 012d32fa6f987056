// src/presentation/http/extractors.rs
//! axum's stock extractors with their rejections routed through
//! [`HttpError`], so malformed input yields `400 {"msg": "Bad request"}`.
use axum::extract::{FromRequest, FromRequestParts, Path, Query};

use super::error::HttpError;

#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct JsonBody<T>(pub T);

#[derive(Debug, Clone, FromRequestParts)]
#[from_request(via(Query), rejection(HttpError))]
pub struct QueryParams<T>(pub T);

#[derive(Debug, Clone, FromRequestParts)]
#[from_request(via(Path), rejection(HttpError))]
pub struct PathParam<T>(pub T);
