/// One playable media resource of a resolved playlist.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlaylistTrack {
    pub title: String,
    pub url: String,
    pub mime: String,
}

/// Source reference of a playlist request, at most one of both is used.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct PlaylistQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistSource<'a> {
    Remote(&'a str),
    Local(&'a str),
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

impl PlaylistQuery {
    /// Empty values count as absent, `url` wins when both are given.
    pub fn source(&self) -> Option<PlaylistSource<'_>> {
        non_empty(self.url.as_ref()).map(PlaylistSource::Remote)
            .or_else(|| non_empty(self.folder.as_ref()).map(PlaylistSource::Local))
    }

    pub fn cache_key(&self) -> Option<String> {
        self.source().map(|source| match source {
            PlaylistSource::Remote(url) => format!("url:{url}"),
            PlaylistSource::Local(folder) => format!("folder:{folder}"),
        })
    }
}

/// Origin of the incoming request, used to build absolute urls for local tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlContext {
    pub protocol: String,
    pub host: String,
}

impl UrlContext {
    pub fn new(protocol: &str, host: &str) -> Self {
        Self {
            protocol: protocol.trim_end_matches("://").to_string(),
            host: host.trim_end_matches('/').to_string(),
        }
    }

    pub fn origin(&self) -> String {
        format!("{}://{}", self.protocol, self.host)
    }
}
