use std::error::Error;
use std::fmt::{Display, Formatter, Result};

use axum::http::StatusCode;

#[macro_export]
macro_rules! create_tunescout_error {
     ($kind: expr, $($arg:tt)*) => {
        $crate::tunescout_error::TuneScoutError::new($kind, format!($($arg)*))
    }
}

#[macro_export]
macro_rules! create_tunescout_error_result {
     ($kind: expr, $($arg:tt)*) => {
        Err($crate::tunescout_error::TuneScoutError::new($kind, format!($($arg)*)))
    }
}

#[macro_export]
macro_rules! info_err {
    ($($arg:tt)*) => {
        $crate::tunescout_error::TuneScoutError::new($crate::tunescout_error::TuneScoutErrorKind::Info, format!($($arg)*))
    }
}

pub use create_tunescout_error;
pub use create_tunescout_error_result;
pub use info_err;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuneScoutErrorKind {
    // do not send message
    Info,
    // send message
    Notify,
}

#[derive(Debug)]
pub struct TuneScoutError {
    pub kind: TuneScoutErrorKind,
    pub message: String,
}

impl TuneScoutError {
    pub const fn new(kind: TuneScoutErrorKind, message: String) -> Self {
        Self {
            kind,
            message,
        }
    }
}

impl Display for TuneScoutError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "TuneScout error: {}", self.message)
    }
}

impl Error for TuneScoutError {}

pub fn str_to_io_error(err: &str) -> std::io::Error {
    std::io::Error::other(err)
}

pub fn to_io_error<E>(err: E) -> std::io::Error
where
    E: Error + Send + Sync + 'static,
{
    std::io::Error::other(err)
}

pub const MSG_MISSING_PARAMETER: &str = "Either url or folder parameter is required";
pub const MSG_INVALID_PROTOCOL: &str = "URL must use HTTP or HTTPS protocol";
pub const MSG_INVALID_FORMAT: &str = "URL format is invalid";
pub const MSG_TRAVERSAL: &str = "Directory traversal is not allowed";
pub const PREFIX_INVALID_URL: &str = "Invalid URL";
pub const PREFIX_REMOTE_FETCH: &str = "Failed to fetch remote playlist";
pub const PREFIX_LOCAL_READ: &str = "Failed to read local playlist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidUrlKind {
    /// The candidate could not be parsed as an absolute url, carries the parser detail.
    Malformed(String),
    /// Parsed, but the scheme is neither `http` nor `https`.
    Protocol,
    /// Parsed, but the input does not look like `scheme://host.tld[/path]`.
    Format,
}

/// Failures of the playlist resolution pipeline.
///
/// `Display` renders the message contract callers match on; the http layer
/// forwards it verbatim in the error envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistError {
    MissingParameter,
    InvalidUrl(InvalidUrlKind),
    Traversal,
    RemoteFetch(String),
    LocalRead(String),
}

impl PlaylistError {
    pub fn remote_fetch<D: Display>(cause: D) -> Self {
        Self::RemoteFetch(format!("{PREFIX_REMOTE_FETCH}: {cause}"))
    }

    pub fn local_read<D: Display>(cause: D) -> Self {
        Self::LocalRead(format!("{PREFIX_LOCAL_READ}: {cause}"))
    }

    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParameter => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Display for PlaylistError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::MissingParameter => write!(f, "{MSG_MISSING_PARAMETER}"),
            Self::InvalidUrl(InvalidUrlKind::Malformed(detail)) => write!(f, "{PREFIX_INVALID_URL}: {detail}"),
            Self::InvalidUrl(InvalidUrlKind::Protocol) => write!(f, "{MSG_INVALID_PROTOCOL}"),
            Self::InvalidUrl(InvalidUrlKind::Format) => write!(f, "{PREFIX_INVALID_URL}: {MSG_INVALID_FORMAT}"),
            Self::Traversal => write!(f, "{MSG_TRAVERSAL}"),
            Self::RemoteFetch(message) | Self::LocalRead(message) => write!(f, "{message}"),
        }
    }
}

impl Error for PlaylistError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_error_messages() {
        assert_eq!(PlaylistError::InvalidUrl(InvalidUrlKind::Protocol).to_string(), "URL must use HTTP or HTTPS protocol");
        assert_eq!(PlaylistError::InvalidUrl(InvalidUrlKind::Format).to_string(), "Invalid URL: URL format is invalid");
        assert_eq!(PlaylistError::local_read(PlaylistError::Traversal).to_string(),
                   "Failed to read local playlist: Directory traversal is not allowed");
        assert_eq!(PlaylistError::remote_fetch("timeout").to_string(), "Failed to fetch remote playlist: timeout");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(PlaylistError::MissingParameter.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(PlaylistError::Traversal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(PlaylistError::remote_fetch("x").status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_tunescout_error_macros() {
        let err = create_tunescout_error!(TuneScoutErrorKind::Notify, "bad {}", 1);
        assert_eq!(err.kind, TuneScoutErrorKind::Notify);
        assert_eq!(err.to_string(), "TuneScout error: bad 1");
        let err = info_err!("cant read {}", "x");
        assert_eq!(err.kind, TuneScoutErrorKind::Info);
    }
}
