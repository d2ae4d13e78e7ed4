pub mod app_state;
pub mod playlist_cache;
