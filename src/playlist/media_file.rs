use percent_encoding::percent_decode_str;

use crate::utils::{capitalize_words, MEDIA_TYPES, MEDIA_TYPE_FALLBACK};

const TITLE_SEPARATORS: &[char] = &['-', '_'];

fn split_extension(file_name: &str) -> Option<(&str, &str)> {
    let name = file_name.rsplit('/').next().unwrap_or(file_name);
    name.rsplit_once('.')
}

/// The lower-cased extension of a supported media file name or path.
pub fn media_extension(file_name: &str) -> Option<String> {
    split_extension(file_name)
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| MEDIA_TYPES.iter().any(|(supported, _)| *supported == ext.as_str()))
}

pub fn mime_for_extension(extension: &str) -> &'static str {
    let ext = extension.to_lowercase();
    MEDIA_TYPES.iter()
        .find(|(supported, _)| *supported == ext)
        .map_or(MEDIA_TYPE_FALLBACK, |(_, mime)| *mime)
}

/// `my_favourite-song.mp3` becomes `My Favourite Song`.
pub fn title_from_filename(file_name: &str) -> String {
    let decoded = percent_decode_str(file_name).decode_utf8_lossy();
    let name = decoded.rsplit('/').next().unwrap_or(decoded.as_ref());
    let stem = match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    };
    let title = capitalize_words(&stem.replace(TITLE_SEPARATORS, " "));
    if title.trim().is_empty() {
        name.to_string()
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_extension_is_case_insensitive() {
        for ext in ["mp3", "wav", "m4a", "ogg", "flac", "aac", "mp4"] {
            assert_eq!(media_extension(&format!("song.{ext}")).as_deref(), Some(ext));
            assert_eq!(media_extension(&format!("song.{}", ext.to_uppercase())).as_deref(), Some(ext));
        }
        assert!(media_extension("notes.txt").is_none());
        assert!(media_extension("cover.jpg").is_none());
        assert!(media_extension("mp3").is_none());
        assert!(media_extension("mp3.dir/readme").is_none());
        assert_eq!(media_extension("dir.v2/Track.Flac").as_deref(), Some("flac"));
    }

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension("mp3"), "audio/mpeg");
        assert_eq!(mime_for_extension("MP3"), "audio/mpeg");
        assert_eq!(mime_for_extension("m4a"), "audio/mp4");
        assert_eq!(mime_for_extension("mp4"), "video/mp4");
        assert_eq!(mime_for_extension("opus"), "audio/*");
    }

    #[test]
    fn test_title_from_filename() {
        assert_eq!(title_from_filename("song3.mp3"), "Song3");
        assert_eq!(title_from_filename("song3.MP3"), "Song3");
        assert_eq!(title_from_filename("my_favourite-song.mp3"), "My Favourite Song");
        assert_eq!(title_from_filename("caf%C3%A9%20del%20mar.flac"), "Café Del Mar");
        assert_eq!(title_from_filename("live.at.wembley.ogg"), "Live.at.wembley");
        assert_eq!(title_from_filename(".mp3"), ".mp3");
    }
}
