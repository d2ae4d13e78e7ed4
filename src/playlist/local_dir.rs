use std::path::Path;

use crate::playlist::DirectoryLister;

/// Lists regular files of a directory on the local filesystem, sorted by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectoryLister;

impl DirectoryLister for FsDirectoryLister {
    async fn list(&self, path: &Path) -> Result<Vec<String>, std::io::Error> {
        let mut entries = tokio::fs::read_dir(path).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
