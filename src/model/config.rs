use log::{debug, warn};

use crate::model::{CacheConfig, HttpConfig, LogConfig, MediaConfig};
use crate::tunescout_error::{create_tunescout_error_result, TuneScoutError, TuneScoutErrorKind};
use crate::utils::file::file_utils;
use crate::utils::{default_api_host, default_api_port};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigApi {
    #[serde(default = "default_api_host")]
    pub host: String,
    #[serde(default = "default_api_port")]
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_root: Option<String>,
}

impl Default for ConfigApi {
    fn default() -> Self {
        Self {
            host: default_api_host(),
            port: default_api_port(),
            web_root: None,
        }
    }
}

impl ConfigApi {
    pub fn prepare(&mut self, working_dir: &str) {
        if self.host.trim().is_empty() {
            self.host = default_api_host();
        }
        self.web_root = self.web_root.as_ref()
            .map(|root| root.trim())
            .filter(|root| !root.is_empty())
            .map(|root| file_utils::make_absolute_path(root, working_dir).to_string_lossy().to_string());
        if let Some(web_root) = &self.web_root {
            if !std::path::Path::new(web_root).is_dir() {
                warn!("web_root does not exists or is not an directory: {web_root}");
                self.web_root = None;
            }
        }
    }

    /// Host header value used when a request doesn't carry one.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub working_dir: String,
    #[serde(default)]
    pub api: ConfigApi,
    #[serde(default)]
    pub media: MediaConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<LogConfig>,
    #[serde(skip)]
    pub t_config_path: String,
    #[serde(skip)]
    pub t_config_file_path: String,
}

impl Config {
    pub fn prepare(&mut self) -> Result<(), TuneScoutError> {
        self.working_dir = file_utils::get_working_path(&self.working_dir);
        debug!("working dir: {}", self.working_dir);
        self.api.prepare(&self.working_dir);
        if self.api.port == 0 {
            return create_tunescout_error_result!(TuneScoutErrorKind::Info, "api port can't be 0");
        }
        self.media.prepare(&self.working_dir)?;
        self.http.prepare();
        self.cache.prepare();
        Ok(())
    }

    pub fn sanitize_sensitive_info(&self) -> bool {
        self.log.as_ref().is_none_or(|l| l.sanitize_sensitive_info)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.log.as_ref().and_then(|l| l.log_level.as_deref())
    }
}
