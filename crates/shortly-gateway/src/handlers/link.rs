use crate::error::{AppError, Result};
use crate::model::{LinkResponse, ShortenRequest};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use shortly_core::{ShortCode, ShortenParams};
use tracing::debug;

const FORWARDED_PROTO: &str = "x-forwarded-proto";
const DEFAULT_SCHEME: &str = "http";

/// `POST /api/v1/shorten`
///
/// The body is read as raw bytes so that an unreadable body (400) can be told
/// apart from one that is not valid JSON (500).
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<LinkResponse>> {
    let body = body.map_err(|rejection| AppError::UnreadableBody(rejection.body_text()))?;
    let request: ShortenRequest = serde_json::from_slice(&body)?;

    let params = ShortenParams {
        original_url: request.original_url,
        host: request_host(&headers, state.default_host()),
        scheme: request_scheme(&headers),
    };
    debug!(original_url = %params.original_url, host = %params.host, "shorten request");

    let record = state.shortener().create_short_url(params).await?;
    Ok(Json(record.into()))
}

/// `GET /{id}`: permanent redirect to the original URL.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let id = ShortCode::new(id).map_err(|_| AppError::MissingId)?;
    let record = state.redirector().resolve(&id).await?;

    debug!(id = %id, location = %record.original_url, "redirecting");
    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, record.original_url)],
    )
        .into_response())
}

/// `GET /`: a redirect without an id.
pub async fn missing_id_handler() -> AppError {
    AppError::MissingId
}

/// Rejects a method the route does not serve.
pub async fn method_not_allowed_handler() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET")]).into_response()
}

fn request_host(headers: &HeaderMap, fallback: &str) -> String {
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|host| !host.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

fn request_scheme(headers: &HeaderMap) -> String {
    headers
        .get(FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        // proxies may append a list, the first entry is the client-facing one
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|scheme| !scheme.is_empty())
        .unwrap_or(DEFAULT_SCHEME)
        .to_string()
}
