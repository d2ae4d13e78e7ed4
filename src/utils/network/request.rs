use std::sync::atomic::Ordering;
use std::time::Instant;

use log::{debug, error};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use url::Url;

use crate::model::HttpConfig;
use crate::playlist::PlaylistFetcher;
use crate::tunescout_error::{create_tunescout_error_result, str_to_io_error, TuneScoutError, TuneScoutErrorKind};
use crate::utils::CONSTANTS;
use crate::utils::debug_if_enabled;

const DEFAULT_USER_AGENT: &str = concat!("tunescout/", env!("CARGO_PKG_VERSION"));
const ACCEPT_MARKUP: &str = "text/html,application/xhtml+xml,*/*;q=0.8";

pub fn create_http_client(cfg: &HttpConfig) -> Result<reqwest::Client, TuneScoutError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_MARKUP));
    let user_agent = cfg.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
    match HeaderValue::from_str(user_agent) {
        Ok(value) => { headers.insert(USER_AGENT, value); }
        Err(_) => return create_tunescout_error_result!(TuneScoutErrorKind::Info, "invalid user agent: {}", user_agent),
    }
    match reqwest::Client::builder()
        .default_headers(headers)
        .timeout(cfg.timeout())
        .connect_timeout(cfg.connect_timeout())
        .build() {
        Ok(client) => Ok(client),
        Err(err) => create_tunescout_error_result!(TuneScoutErrorKind::Notify, "cant create http client: {}", err),
    }
}

pub async fn get_remote_content(client: &reqwest::Client, url: &Url) -> Result<String, std::io::Error> {
    let start_time = Instant::now();
    debug_if_enabled!("fetching remote content {}", sanitize_sensitive_info(url.as_str()));
    match client.get(url.clone()).send().await {
        Ok(response) => {
            let status = response.status();
            if status.is_success() {
                match response.text().await {
                    Ok(content) => {
                        debug!("fetched {} bytes from {}, took {} ms", content.len(), sanitize_sensitive_info(url.as_str()), start_time.elapsed().as_millis());
                        Ok(content)
                    }
                    Err(err) => Err(str_to_io_error(&format!("Failed to read response body: {err}"))),
                }
            } else {
                error!("Request failed with status {} {}", status, sanitize_sensitive_info(url.as_str()));
                Err(str_to_io_error(&format!("Request failed with status code {}", status.as_u16())))
            }
        }
        Err(err) => {
            error!("Request failed: {} {}", sanitize_sensitive_info(url.as_str()), sanitize_sensitive_info(&err.to_string()));
            Err(str_to_io_error(&sanitize_sensitive_info(&err.to_string())))
        }
    }
}

impl PlaylistFetcher for reqwest::Client {
    async fn fetch(&self, url: &Url) -> Result<String, std::io::Error> {
        get_remote_content(self, url).await
    }
}

pub fn set_sanitize_sensitive_info(value: bool) {
    CONSTANTS.sanitize.store(value, Ordering::Relaxed);
}

pub fn sanitize_sensitive_info(query: &str) -> String {
    if CONSTANTS.sanitize.load(Ordering::Relaxed) {
        let masked_query = CONSTANTS.re_username.replace_all(query, "$1***");
        let masked_query = CONSTANTS.re_password.replace_all(&masked_query, "$1***");
        let masked_query = CONSTANTS.re_token.replace_all(&masked_query, "$1***");
        masked_query.to_string()
    } else {
        query.to_string()
    }
}
