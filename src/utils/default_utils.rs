use crate::utils::constants::{DEFAULT_API_HOST, DEFAULT_API_PORT, DEFAULT_MEDIA_ROOT, DEFAULT_MEDIA_URL_PREFIX};

pub(crate) const fn default_as_true() -> bool { true }

pub(crate) fn default_api_host() -> String { String::from(DEFAULT_API_HOST) }

pub(crate) const fn default_api_port() -> u16 { DEFAULT_API_PORT }

pub(crate) fn default_media_root() -> String { String::from(DEFAULT_MEDIA_ROOT) }

pub(crate) fn default_media_url_prefix() -> String { String::from(DEFAULT_MEDIA_URL_PREFIX) }

pub(crate) const fn default_timeout_secs() -> u64 { 30 }

pub(crate) const fn default_connect_timeout_secs() -> u64 { 10 }

pub(crate) const fn default_cache_ttl_secs() -> u64 { 300 }

pub(crate) const fn default_cache_max_entries() -> usize { 256 }
