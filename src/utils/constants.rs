use regex::Regex;
use std::sync::atomic::AtomicBool;
use std::sync::LazyLock;

pub const CONFIG_PATH: &str = "config";
pub const CONFIG_FILE: &str = "config.yml";

pub const DEFAULT_API_HOST: &str = "127.0.0.1";
pub const DEFAULT_API_PORT: u16 = 8901;
pub const DEFAULT_MEDIA_ROOT: &str = "./public/music";
pub const DEFAULT_MEDIA_URL_PREFIX: &str = "music";

pub const HEADER_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Extensions of playable resources with their mime type, looked up by lower-cased extension.
pub const MEDIA_TYPES: &[(&str, &str)] = &[
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("m4a", "audio/mp4"),
    ("ogg", "audio/ogg"),
    ("flac", "audio/flac"),
    ("aac", "audio/aac"),
    ("mp4", "video/mp4"),
];

pub const MEDIA_TYPE_FALLBACK: &str = "audio/*";

pub struct Constants {
    pub re_username: Regex,
    pub re_password: Regex,
    pub re_token: Regex,
    pub re_env_var: Regex,
    pub re_strict_url: Regex,
    pub re_whitespace: Regex,
    pub sanitize: AtomicBool,
}

pub static CONSTANTS: LazyLock<Constants> = LazyLock::new(||
    Constants {
        re_username: Regex::new(r"(username=)[^&]*").unwrap(),
        re_password: Regex::new(r"(password=)[^&]*").unwrap(),
        re_token: Regex::new(r"(token=)[^&]*").unwrap(),
        re_env_var: Regex::new(r"\$\{env:(?P<var>[a-zA-Z_][a-zA-Z0-9_]*)}").unwrap(),
        re_strict_url: Regex::new(r"^(?i:https?)://[A-Za-z0-9][A-Za-z0-9.-]*\.[A-Za-z]{2,}(:\d{1,5})?([/?#].*)?$").unwrap(),
        re_whitespace: Regex::new(r"\s+").unwrap(),
        sanitize: AtomicBool::new(true),
    }
);
