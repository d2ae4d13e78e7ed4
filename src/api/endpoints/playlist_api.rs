use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use log::debug;

use crate::api::api_utils::{error_response, get_url_context, playlist_response};
use crate::api::model::app_state::AppState;
use crate::model::PlaylistQuery;
use crate::playlist;
use crate::utils::debug_if_enabled;
use crate::utils::network::request::sanitize_sensitive_info;

async fn playlist_content(
    axum::extract::State(app_state): axum::extract::State<Arc<AppState>>,
    headers: axum::http::HeaderMap,
    query: Result<axum::extract::Query<PlaylistQuery>, QueryRejection>,
) -> axum::response::Response {
    let query = match query {
        Ok(axum::extract::Query(query)) => query,
        Err(rejection) => {
            debug!("invalid playlist query: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, &rejection.body_text());
        }
    };
    let ctx = get_url_context(&headers, &app_state.config.api);
    // local track urls contain the request origin, it has to be part of the key
    let cache_key = query.cache_key().map(|key| format!("{}|{key}", ctx.origin()));

    if let (Some(cache), Some(key)) = (app_state.cache.as_ref().as_ref(), cache_key.as_ref()) {
        if let Some(tracks) = cache.get(key).await {
            debug!("playlist cache hit {}", sanitize_sensitive_info(key));
            return playlist_response(&tracks);
        }
    }

    match playlist::get_playlist(&query, app_state.http_client.as_ref(), &app_state.directory_lister,
                                 &app_state.config.media, &ctx).await {
        Ok(tracks) => {
            let tracks = Arc::new(tracks);
            if let (Some(cache), Some(key)) = (app_state.cache.as_ref().as_ref(), cache_key) {
                cache.insert(key, Arc::clone(&tracks)).await;
                debug_if_enabled!("playlist cache holds {} entries", cache.size().await);
            }
            playlist_response(&tracks)
        }
        Err(err) => {
            debug!("playlist request failed: {}", sanitize_sensitive_info(&err.to_string()));
            error_response(err.status_code(), &err.to_string())
        }
    }
}

pub fn playlist_api_register() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route("/playlist", axum::routing::get(playlist_content))
}
