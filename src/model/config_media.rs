use std::path::PathBuf;

use crate::tunescout_error::{create_tunescout_error_result, TuneScoutError, TuneScoutErrorKind};
use crate::utils::file::file_utils::make_absolute_path;
use crate::utils::{default_media_root, default_media_url_prefix};

/// The static-media root. Local playlists are only ever listed below `root`,
/// and the files are served under `/<url_prefix>`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MediaConfig {
    #[serde(default = "default_media_root")]
    pub root: String,
    #[serde(default = "default_media_url_prefix")]
    pub url_prefix: String,
    #[serde(skip)]
    pub t_root_path: PathBuf,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            root: default_media_root(),
            url_prefix: default_media_url_prefix(),
            t_root_path: PathBuf::from(default_media_root()),
        }
    }
}

impl MediaConfig {
    pub fn prepare(&mut self, working_dir: &str) -> Result<(), TuneScoutError> {
        if self.root.trim().is_empty() {
            self.root = default_media_root();
        }
        self.t_root_path = make_absolute_path(self.root.trim(), working_dir);

        let prefix = self.url_prefix.trim().trim_matches('/');
        if prefix.is_empty() {
            return create_tunescout_error_result!(TuneScoutErrorKind::Info, "media url_prefix can't be empty");
        }
        if prefix.contains("..") || prefix.contains('\\') {
            return create_tunescout_error_result!(TuneScoutErrorKind::Info, "media url_prefix is invalid: {}", prefix);
        }
        self.url_prefix = prefix.to_string();
        Ok(())
    }

    /// Site relative path the media root is served under, e.g. `/music`.
    pub fn url_path(&self) -> String {
        format!("/{}", self.url_prefix)
    }
}
