use std::path::{Component, PathBuf};

use path_clean::PathClean;
use url::Url;

use crate::tunescout_error::{InvalidUrlKind, PlaylistError};
use crate::utils::CONSTANTS;

/// Returns the canonical form of an absolute `http(s)` url.
pub fn validate_url(candidate: &str) -> Result<String, PlaylistError> {
    let url = Url::parse(candidate).map_err(|err| PlaylistError::InvalidUrl(InvalidUrlKind::Malformed(err.to_string())))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(PlaylistError::InvalidUrl(InvalidUrlKind::Protocol));
    }
    // the parser accepts hosts like `localhost` or `http:/x`, the raw input has to look like scheme://host.tld
    if !CONSTANTS.re_strict_url.is_match(candidate) {
        return Err(PlaylistError::InvalidUrl(InvalidUrlKind::Format));
    }
    Ok(url.to_string())
}

/// Returns a normalized path relative to the media root, the empty string is the root itself.
pub fn validate_folder_path(candidate: &str) -> Result<String, PlaylistError> {
    // separators are unified first, otherwise `\etc` would turn into the absolute `/etc`
    let unified = candidate.replace('\\', "/");
    let stripped = unified.trim_start_matches('/');
    let cleaned = PathBuf::from(stripped).clean();
    let normalized = cleaned.to_string_lossy();
    let normalized = normalized.trim_end_matches('/');
    if normalized == "." || normalized.is_empty() {
        return Ok(String::new());
    }
    // cleaning can't resolve a leading `..`, whatever is left is an escape attempt
    if normalized.contains("..") || !cleaned.components().all(|c| matches!(c, Component::Normal(_))) {
        return Err(PlaylistError::Traversal);
    }
    Ok(normalized.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_http_and_https() {
        assert_eq!(validate_url("https://example.com/music/").unwrap(), "https://example.com/music/");
        assert_eq!(validate_url("http://example.com").unwrap(), "http://example.com/");
        assert_eq!(validate_url("https://sub.example.co.uk:8443/a b/list.html?x=1").unwrap(),
                   "https://sub.example.co.uk:8443/a%20b/list.html?x=1");
    }

    #[test]
    fn test_validate_url_protocol_message_is_verbatim() {
        let err = validate_url("ftp://example.com/x").unwrap_err();
        assert_eq!(err, PlaylistError::InvalidUrl(InvalidUrlKind::Protocol));
        assert_eq!(err.to_string(), "URL must use HTTP or HTTPS protocol");
        assert_eq!(validate_url("javascript:alert(1)").unwrap_err().to_string(), "URL must use HTTP or HTTPS protocol");
        assert_eq!(validate_url("file:///etc/passwd").unwrap_err().to_string(), "URL must use HTTP or HTTPS protocol");
    }

    #[test]
    fn test_validate_url_malformed() {
        let err = validate_url("not-a-url").unwrap_err();
        assert!(matches!(err, PlaylistError::InvalidUrl(InvalidUrlKind::Malformed(_))));
        assert!(err.to_string().contains("Invalid URL"));
        assert!(validate_url("").unwrap_err().to_string().starts_with("Invalid URL: "));
    }

    #[test]
    fn test_validate_url_format() {
        for candidate in ["http://localhost/music", "http:/example.com/x", "https://example.c/", "http://user@example.com/"] {
            let err = validate_url(candidate).unwrap_err();
            assert_eq!(err.to_string(), "Invalid URL: URL format is invalid", "{candidate}");
        }
    }

    #[test]
    fn test_validate_folder_path_normalizes() {
        assert_eq!(validate_folder_path("/music/").unwrap(), "music");
        assert_eq!(validate_folder_path("music/subfolder/").unwrap(), "music/subfolder");
        assert_eq!(validate_folder_path("//music/./rock//").unwrap(), "music/rock");
        assert_eq!(validate_folder_path("music/old/../new").unwrap(), "music/new");
        assert_eq!(validate_folder_path("/").unwrap(), "");
        assert_eq!(validate_folder_path("music\\jazz").unwrap(), "music/jazz");
    }

    #[test]
    fn test_validate_folder_path_rejects_traversal() {
        for candidate in ["../../../etc", "music/../../etc", "a/../../b", "..", "/../secret", "..\\..\\windows", "music/..\\..\\etc", "music/..hidden"] {
            let err = validate_folder_path(candidate).unwrap_err();
            assert_eq!(err, PlaylistError::Traversal, "{candidate}");
            assert_eq!(err.to_string(), "Directory traversal is not allowed");
        }
    }

    #[test]
    fn test_validate_folder_path_stays_below_root() {
        assert_eq!(validate_folder_path("\\etc").unwrap(), "etc");
        assert_eq!(validate_folder_path("\\\\srv\\x").unwrap(), "srv/x");
        assert_eq!(validate_folder_path("/\\/tmp\\music\\").unwrap(), "tmp/music");
        for candidate in ["\\etc", "\\\\srv\\x", "//etc", "/./etc"] {
            let validated = validate_folder_path(candidate).unwrap();
            let joined = PathBuf::from("/srv/public/music").join(&validated);
            assert!(joined.starts_with("/srv/public/music"), "{candidate}");
            assert!(PathBuf::from(&validated).components().all(|c| matches!(c, Component::Normal(_))), "{candidate}");
        }
    }

    #[test]
    fn test_validate_folder_path_is_idempotent() {
        for candidate in ["/music/", "music/subfolder/", "a/./b/../c"] {
            let once = validate_folder_path(candidate).unwrap();
            assert_eq!(validate_folder_path(&once).unwrap(), once);
        }
    }
}
