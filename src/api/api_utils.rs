use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::model::{ConfigApi, PlaylistTrack, UrlContext};
use crate::utils::HEADER_FORWARDED_PROTO;

#[derive(Serialize)]
struct PlaylistResponse<'a> {
    success: bool,
    count: usize,
    data: &'a [PlaylistTrack],
}

#[derive(Serialize)]
struct ErrorResponse<'a> {
    success: bool,
    message: &'a str,
}

pub fn playlist_response(tracks: &[PlaylistTrack]) -> axum::response::Response {
    (StatusCode::OK, axum::Json(PlaylistResponse { success: true, count: tracks.len(), data: tracks })).into_response()
}

pub fn error_response(status: StatusCode, message: &str) -> axum::response::Response {
    (status, axum::Json(ErrorResponse { success: false, message })).into_response()
}

fn is_valid_host(host: &str) -> bool {
    !host.is_empty() && host.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | ':' | '[' | ']'))
}

/// Protocol and host the client used to reach us, behind a proxy `X-Forwarded-Proto` wins.
pub fn get_url_context(headers: &HeaderMap, api: &ConfigApi) -> UrlContext {
    let protocol = headers.get(HEADER_FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_lowercase())
        .filter(|value| value == "http" || value == "https")
        .unwrap_or_else(|| String::from("http"));
    let host = headers.get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| is_valid_host(value))
        .map_or_else(|| api.authority(), ToString::to_string);
    UrlContext::new(&protocol, &host)
}
