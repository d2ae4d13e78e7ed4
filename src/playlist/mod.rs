use std::future::Future;
use std::path::Path;

use url::Url;

mod extractor;
mod local_dir;
mod media_file;
mod resolver;
mod validation;

pub use self::extractor::extract_tracks;
pub use self::local_dir::FsDirectoryLister;
pub use self::media_file::{media_extension, mime_for_extension, title_from_filename};
pub use self::resolver::{get_playlist, resolve_local, resolve_remote};
pub use self::validation::{validate_folder_path, validate_url};

/// Performs the single outbound GET for a remote playlist page.
pub trait PlaylistFetcher {
    fn fetch(&self, url: &Url) -> impl Future<Output=Result<String, std::io::Error>> + Send;
}

/// Lists the file names of one directory, non recursive.
pub trait DirectoryLister {
    fn list(&self, path: &Path) -> impl Future<Output=Result<Vec<String>, std::io::Error>> + Send;
}
