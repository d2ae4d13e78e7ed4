use scraper::{Html, Selector};
use url::Url;

use crate::model::PlaylistTrack;
use crate::playlist::media_file::{media_extension, mime_for_extension, title_from_filename};
use crate::utils::collapse_whitespace;

fn resolve_href(base: Option<&Url>, href: &str) -> Option<Url> {
    let resolved = match base {
        Some(base_url) => base_url.join(href).ok()?,
        None => Url::parse(href).ok()?,
    };
    if matches!(resolved.scheme(), "http" | "https") { Some(resolved) } else { None }
}

/// Collects the media links of a html page in document order.
///
/// Only anchors with an `href` whose path ends with a supported media extension are taken.
/// Relative links are resolved against `base_url`. The anchor text becomes the title unless
/// it is empty or just repeats the link, then the title is derived from the file name.
pub fn extract_tracks(markup: &str, base_url: &str) -> Vec<PlaylistTrack> {
    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };
    let base = Url::parse(base_url).ok();
    let document = Html::parse_document(markup);
    document.select(&anchor_selector).filter_map(|anchor| {
        let href = anchor.value().attr("href").map(str::trim).filter(|href| !href.is_empty())?;
        let href_path = href.split(['?', '#']).next().unwrap_or_default();
        let extension = media_extension(href_path)?;
        let url = resolve_href(base.as_ref(), href)?;
        let text = collapse_whitespace(&anchor.text().collect::<String>());
        let title = if text.is_empty() || text == href {
            let file_name = url.path_segments().and_then(|mut segments| segments.next_back()).unwrap_or(href_path);
            title_from_filename(file_name)
        } else {
            text
        };
        Some(PlaylistTrack {
            title,
            url: url.to_string(),
            mime: mime_for_extension(&extension).to_string(),
        })
    }).collect()
}
