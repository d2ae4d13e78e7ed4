pub mod healthcheck_api;
pub mod playlist_api;
