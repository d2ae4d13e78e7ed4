mod config;
mod config_cache;
mod config_http;
mod config_log;
mod config_media;
mod healthcheck;
mod playlist;

pub use self::config::*;
pub use self::config_cache::*;
pub use self::config_http::*;
pub use self::config_log::*;
pub use self::config_media::*;
pub use self::healthcheck::*;
pub use self::playlist::*;
