//! Original-text reconstruction for re-editing a chirp.
//!
//! The host stores composed text with media links, implicit reply
//! mentions, and quote URLs baked in. To refill a composer with what the
//! author actually typed, the baked-in spans are padded out with the BEL
//! control character first (control characters cannot appear in posts, so
//! they mark spans for deletion without shifting the entity indices), then
//! stripped in one pass.

use betterdeck_types::{Chirp, IndexRange};

/// Replaces the characters in `range` with BEL padding of equal length.
/// Ranges are in characters; an out-of-bounds range is clamped.
#[must_use]
pub fn silence_range(text: &str, range: IndexRange) -> String {
    let chars: Vec<char> = text.chars().collect();
    let start = range.start.min(chars.len());
    let end = range.end.clamp(start, chars.len());
    chars[..start]
        .iter()
        .chain(std::iter::repeat(&'\u{0007}').take(end - start))
        .chain(chars[end..].iter())
        .collect()
}

/// Undoes the handful of HTML entities the host leaves in chirp text.
#[must_use]
pub fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Canonical URL of a chirp, when its author is known.
#[must_use]
pub fn chirp_url(chirp: &Chirp) -> Option<String> {
    chirp
        .user
        .as_ref()
        .map(|user| format!("https://twitter.com/{}/status/{}", user.screen_name, chirp.id))
}

/// Reconstructs the text the author composed: strips the first media
/// link, implicit reply mentions, and the quoted-chirp URL; expands the
/// remaining shortened URLs; unescapes and trims.
#[must_use]
pub fn original_text(chirp: &Chirp) -> String {
    let mut text = chirp.text.clone().unwrap_or_default();

    if let Some(first_media) = chirp.entities.media.first() {
        if let Some(indices) = first_media.indices {
            text = silence_range(&text, indices);
        }
    }

    for mention in &chirp.entities.user_mentions {
        if mention.is_implicit {
            if let Some(indices) = mention.indices {
                text = silence_range(&text, indices);
            }
        }
    }

    let quoted_url = chirp.quoted().as_deref().and_then(chirp_url);
    for url in &chirp.entities.urls {
        if Some(&url.expanded_url) == quoted_url.as_ref() {
            if let Some(indices) = url.indices {
                text = silence_range(&text, indices);
            }
        }
    }

    text = text.replace('\u{0007}', "");

    for url in &chirp.entities.urls {
        text = text.replace(&url.url, &url.expanded_url);
    }

    unescape_html(&text).trim().to_string()
}
