use log::{debug, error};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::model::{MediaConfig, PlaylistQuery, PlaylistSource, PlaylistTrack, UrlContext};
use crate::playlist::extractor::extract_tracks;
use crate::playlist::media_file::{media_extension, mime_for_extension, title_from_filename};
use crate::playlist::validation::{validate_folder_path, validate_url};
use crate::playlist::{DirectoryLister, PlaylistFetcher};
use crate::tunescout_error::{InvalidUrlKind, PlaylistError};
use crate::utils::network::request::sanitize_sensitive_info;

// encodeURI keeps these, `?` and `#` are encoded too because they only occur inside file names here
const MEDIA_PATH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/').remove(b';').remove(b',').remove(b':').remove(b'@')
    .remove(b'&').remove(b'=').remove(b'+').remove(b'$').remove(b'-')
    .remove(b'_').remove(b'.').remove(b'!').remove(b'~').remove(b'*')
    .remove(b'\'').remove(b'(').remove(b')');

/// Fetches a remote page and collects the media links found in it.
pub async fn resolve_remote<F: PlaylistFetcher>(fetcher: &F, url: &str) -> Result<Vec<PlaylistTrack>, PlaylistError> {
    let validated = match validate_url(url) {
        Ok(validated) => validated,
        Err(err @ PlaylistError::InvalidUrl(InvalidUrlKind::Protocol)) => return Err(err),
        Err(err) => return Err(PlaylistError::remote_fetch(err)),
    };
    let remote_url = Url::parse(&validated).map_err(PlaylistError::remote_fetch)?;
    match fetcher.fetch(&remote_url).await {
        Ok(content) => {
            let tracks = extract_tracks(&content, &validated);
            debug!("found {} tracks at {}", tracks.len(), sanitize_sensitive_info(&validated));
            Ok(tracks)
        }
        Err(err) => {
            error!("cant fetch remote playlist {}: {}", sanitize_sensitive_info(&validated), err);
            Err(PlaylistError::remote_fetch(err))
        }
    }
}

fn local_track_url(ctx: &UrlContext, url_prefix: &str, folder: &str, file_name: &str) -> String {
    let path = if folder.is_empty() {
        format!("{url_prefix}/{file_name}")
    } else {
        format!("{url_prefix}/{folder}/{file_name}")
    };
    format!("{}/{}", ctx.origin(), utf8_percent_encode(&path, MEDIA_PATH_ENCODE_SET))
}

/// Lists a folder below the media root and maps its media files to tracks served by this host.
pub async fn resolve_local<L: DirectoryLister>(lister: &L, media: &MediaConfig, folder: &str, ctx: &UrlContext) -> Result<Vec<PlaylistTrack>, PlaylistError> {
    let validated = validate_folder_path(folder).map_err(PlaylistError::local_read)?;
    let directory = if validated.is_empty() { media.t_root_path.clone() } else { media.t_root_path.join(&validated) };
    let file_names = match lister.list(&directory).await {
        Ok(names) => names,
        Err(err) => {
            error!("cant read local playlist {}: {}", directory.display(), err);
            return Err(PlaylistError::local_read(err));
        }
    };
    let tracks: Vec<PlaylistTrack> = file_names.iter().filter_map(|file_name| {
        let extension = media_extension(file_name)?;
        Some(PlaylistTrack {
            title: title_from_filename(file_name),
            url: local_track_url(ctx, &media.url_prefix, &validated, file_name),
            mime: mime_for_extension(&extension).to_string(),
        })
    }).collect();
    debug!("found {} tracks in {}", tracks.len(), directory.display());
    Ok(tracks)
}

/// Resolves a playlist from whichever source the query names, `url` takes precedence.
pub async fn get_playlist<F, L>(query: &PlaylistQuery, fetcher: &F, lister: &L, media: &MediaConfig, ctx: &UrlContext) -> Result<Vec<PlaylistTrack>, PlaylistError>
where
    F: PlaylistFetcher,
    L: DirectoryLister,
{
    match query.source() {
        None => Err(PlaylistError::MissingParameter),
        Some(PlaylistSource::Remote(url)) => resolve_remote(fetcher, url).await,
        Some(PlaylistSource::Local(folder)) => resolve_local(lister, media, folder, ctx).await,
    }
}
