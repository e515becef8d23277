//! Media URL extraction and download-filename assembly.

use betterdeck_types::{Chirp, MediaType, VideoVariant};
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors raised while extracting media from a chirp.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("unsupported media shape: {0}")]
    UnsupportedShape(String),
}

/// Picks the variant with the highest bitrate; variants without a bitrate
/// rank lowest.
#[must_use]
pub fn best_variant(variants: &[VideoVariant]) -> Option<&VideoVariant> {
    variants
        .iter()
        .max_by_key(|v| v.bitrate.map_or(-1i128, |b| i128::from(b)))
}

/// Direct download URLs for every media attachment on a chirp: photos at
/// their original rendition, videos and gifs at their best encoding.
pub fn media_urls(chirp: &Chirp) -> MediaResult<Vec<String>> {
    let mut urls = Vec::with_capacity(chirp.entities.media.len());
    for item in &chirp.entities.media {
        match item.media_type {
            MediaType::Photo => urls.push(format!("{}:orig", item.media_url_https)),
            MediaType::Video | MediaType::AnimatedGif => {
                let variant = best_variant(&item.video_variants).ok_or_else(|| {
                    MediaError::UnsupportedShape(format!(
                        "video media without variants: {}",
                        item.media_url_https
                    ))
                })?;
                urls.push(variant.url.clone());
            }
        }
    }
    Ok(urls)
}

fn rendition_suffix() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r":[a-z]+$").expect("valid literal pattern"))
}

fn strip_rendition(url: &str) -> String {
    rendition_suffix().replace(url, "").into_owned()
}

fn last_path_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Placeholder values for the download-filename template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaParts {
    pub file_extension: String,
    pub file_name: String,
    pub posted_user: String,
}

/// Derives the filename parts for one media URL of a chirp.
#[must_use]
pub fn media_parts(chirp: &Chirp, url: &str) -> MediaParts {
    let stripped = strip_rendition(url);
    MediaParts {
        file_extension: stripped.rsplit('.').next().unwrap_or_default().to_string(),
        file_name: last_path_segment(url)
            .split('.')
            .next()
            .unwrap_or_default()
            .to_string(),
        posted_user: chirp
            .display_user()
            .map(|u| u.screen_name.clone())
            .unwrap_or_default(),
    }
}

/// Original-file naming for re-uploads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrlParts {
    pub original_extension: String,
    pub original_file: String,
}

/// Splits a media URL into its original file stem and extension.
#[must_use]
pub fn media_url_parts(url: &str) -> MediaUrlParts {
    let stripped = strip_rendition(url);
    MediaUrlParts {
        original_extension: stripped.rsplit('.').next().unwrap_or_default().to_string(),
        original_file: last_path_segment(url)
            .split('.')
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}

/// The download-filename format with `{placeholder}` substitution.
///
/// Stand-in for the host's template renderer: the format string comes from
/// settings and only ever references the three [`MediaParts`] fields.
#[derive(Debug, Clone)]
pub struct FilenameTemplate {
    template: String,
}

impl FilenameTemplate {
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Renders the template against one media URL's parts.
    #[must_use]
    pub fn render(&self, parts: &MediaParts) -> String {
        self.template
            .replace("{fileExtension}", &parts.file_extension)
            .replace("{fileName}", &parts.file_name)
            .replace("{postedUser}", &parts.posted_user)
    }
}
