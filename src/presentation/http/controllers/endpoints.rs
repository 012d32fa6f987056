use crate::presentation::http::error::{HttpError, HttpResult};
use crate::presentation::http::openapi::EndpointsResponse;
use axum::Json;

/// Hand-written description of every endpoint, served verbatim by `GET /api`.
pub const ENDPOINTS_DOCUMENT: &str = include_str!("../../../../endpoints.json");

#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "Description of every available endpoint.", body = EndpointsResponse)
    ),
    tag = "System"
)]
pub async fn get_endpoints() -> HttpResult<Json<EndpointsResponse>> {
    let endpoints = serde_json::from_str(ENDPOINTS_DOCUMENT)
        .map_err(|err| HttpError::internal(format!("endpoints document is invalid: {err}")))?;
    Ok(Json(EndpointsResponse { endpoints }))
}
