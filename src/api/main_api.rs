use std::sync::Arc;

use axum::http::Method;
use log::{error, info};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::endpoints::healthcheck_api::healthcheck_api_register;
use crate::api::endpoints::playlist_api::playlist_api_register;
use crate::api::model::app_state::AppState;
use crate::model::Config;
use crate::tunescout_error::to_io_error;
use crate::utils::network::request::create_http_client;

fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600))
}

pub fn create_router(app_state: Arc<AppState>) -> axum::Router {
    let media = &app_state.config.media;
    let mut router = axum::Router::new()
        .merge(healthcheck_api_register())
        .merge(playlist_api_register())
        .nest_service(&media.url_path(), ServeDir::new(&media.t_root_path));

    if let Some(web_root) = app_state.config.api.web_root.as_ref() {
        router = router.fallback_service(ServeDir::new(web_root));
    }

    router
        .layer(create_cors_layer())
        .with_state(app_state)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("cant listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

pub async fn start_server(cfg: Arc<Config>) -> std::io::Result<()> {
    let host = cfg.api.host.to_string();
    let port = cfg.api.port;
    let media_root = &cfg.media.t_root_path;
    if !media_root.is_dir() {
        error!("media root does not exists or is not a directory: {}", media_root.display());
    }

    let http_client = create_http_client(&cfg.http).map_err(to_io_error)?;
    let app_state = Arc::new(AppState::new(Arc::clone(&cfg), http_client));
    let router = create_router(app_state);

    info!("media root: {} served at {}", media_root.display(), cfg.media.url_path());
    if cfg.cache.enabled {
        info!("playlist cache enabled, ttl {}s, max {} entries", cfg.cache.ttl_secs, cfg.cache.max_entries);
    }
    info!("server running: http://{host}:{port}");

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_config(media_root: &std::path::Path, cache_enabled: bool) -> Arc<Config> {
        let mut cfg = Config::default();
        cfg.media.root = media_root.to_string_lossy().to_string();
        cfg.cache.enabled = cache_enabled;
        cfg.prepare().unwrap();
        Arc::new(cfg)
    }

    fn test_router(cfg: &Arc<Config>) -> axum::Router {
        let client = create_http_client(&cfg.http).unwrap();
        create_router(Arc::new(AppState::new(Arc::clone(cfg), client)))
    }

    async fn get_json(router: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri(uri).header("host", "tunes.example.com").body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn media_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("rock")).unwrap();
        for name in ["song1.mp3", "song2.mp3", "not-a-song.txt", "song3.MP3"] {
            std::fs::write(dir.path().join("rock").join(name), b"ID3").unwrap();
        }
        dir
    }

    #[tokio::test]
    async fn test_missing_parameter() {
        let dir = media_dir();
        let cfg = test_config(dir.path(), false);
        let (status, body) = get_json(test_router(&cfg), "/playlist").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({"success": false, "message": "Either url or folder parameter is required"}));
    }

    #[tokio::test]
    async fn test_malformed_query_uses_error_envelope() {
        let dir = media_dir();
        let cfg = test_config(dir.path(), false);
        let (status, body) = get_json(test_router(&cfg), "/playlist?folder=a&folder=b").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().is_some_and(|message| !message.is_empty()));
    }

    #[tokio::test]
    async fn test_backslash_folder_stays_below_media_root() {
        let dir = media_dir();
        let outside = tempfile::tempdir().unwrap();
        std::fs::write(outside.path().join("leak.mp3"), b"ID3").unwrap();
        let cfg = test_config(dir.path(), false);
        let folder = outside.path().to_string_lossy().replace('/', "\\");
        let uri = format!("/playlist?folder={}", percent_encoding::utf8_percent_encode(&folder, percent_encoding::NON_ALPHANUMERIC));
        let (status, body) = get_json(test_router(&cfg), &uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["message"].as_str().is_some_and(|message| message.starts_with("Failed to read local playlist: ")));
    }

    #[tokio::test]
    async fn test_local_playlist() {
        let dir = media_dir();
        let cfg = test_config(dir.path(), false);
        let (status, body) = get_json(test_router(&cfg), "/playlist?folder=%2Frock%2F").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 3);
        assert_eq!(body["data"][0], serde_json::json!({
            "title": "Song1", "url": "http://tunes.example.com/music/rock/song1.mp3", "mime": "audio/mpeg"
        }));
        assert_eq!(body["data"][2]["title"], "Song3");
    }

    #[tokio::test]
    async fn test_traversal_is_rejected() {
        let dir = media_dir();
        let cfg = test_config(dir.path(), false);
        let (status, body) = get_json(test_router(&cfg), "/playlist?folder=..%2F..%2F..%2Fetc").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Failed to read local playlist: Directory traversal is not allowed");
    }

    #[tokio::test]
    async fn test_invalid_protocol_message_is_verbatim() {
        let dir = media_dir();
        let cfg = test_config(dir.path(), false);
        let (status, body) = get_json(test_router(&cfg), "/playlist?url=ftp%3A%2F%2Fexample.com%2Fx").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "URL must use HTTP or HTTPS protocol");
    }

    #[tokio::test]
    async fn test_cached_playlist_survives_file_removal() {
        let dir = media_dir();
        let cfg = test_config(dir.path(), true);
        let router = test_router(&cfg);
        let (_, first) = get_json(router.clone(), "/playlist?folder=rock").await;
        std::fs::remove_file(dir.path().join("rock").join("song1.mp3")).unwrap();
        let (_, second) = get_json(router.clone(), "/playlist?folder=rock").await;
        assert_eq!(first, second);
        assert_eq!(second["count"], 3);
    }

    #[tokio::test]
    async fn test_serves_media_files() {
        let dir = media_dir();
        let cfg = test_config(dir.path(), false);
        let request = Request::builder().uri("/music/rock/song1.mp3").body(Body::empty()).unwrap();
        let response = test_router(&cfg).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_healthcheck() {
        let dir = media_dir();
        let cfg = test_config(dir.path(), false);
        let (status, body) = get_json(test_router(&cfg), "/healthcheck").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
