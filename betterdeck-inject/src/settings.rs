//! Injection settings.
//!
//! The companion context embeds the current settings as a JSON blob in
//! markup before the injected code runs; `settingsReady` swaps in a fresh
//! blob later without a reload. Unknown fields are ignored and missing
//! fields take defaults, so settings written by a newer companion never
//! break an older injection layer.

use crate::InjectResult;
use serde::Deserialize;

/// How a modified (ctrl/meta) interaction treats the chirp's author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Ask the host to show its follow dialog.
    Prompt,
    /// Follow the author directly when not already following.
    #[default]
    Owner,
}

/// Settings for ctrl/meta-modified like and repost clicks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CtrlInteractions {
    pub enabled: bool,
    pub mode: InteractionMode,
}

/// The injection layer's feature flags and formats.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rewrite rendered anchors to their full (non-shortened) URLs.
    pub no_tco: bool,
    /// Treat phrase filters as regular expressions.
    pub regex_filter: bool,
    pub collapse_columns: bool,
    /// Pause a column scrolled to the top when collapsing it.
    pub collapse_columns_pause: bool,
    /// Unpause a scrolled column when uncollapsing it.
    pub uncollapse_columns_unpause: bool,
    pub pause_scroll_on_hover: bool,
    pub update_title_on_notifications: bool,
    /// Filename format for downloaded media, with `{fileName}`-style
    /// placeholders.
    pub download_filename_format: String,
    pub ctrl_changes_interactions: CtrlInteractions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            no_tco: false,
            regex_filter: false,
            collapse_columns: false,
            collapse_columns_pause: false,
            uncollapse_columns_unpause: false,
            pause_scroll_on_hover: false,
            update_title_on_notifications: false,
            download_filename_format: "{fileName}.{fileExtension}".to_string(),
            ctrl_changes_interactions: CtrlInteractions::default(),
        }
    }
}

impl Settings {
    /// Parses the embedded settings blob.
    pub fn from_json(raw: &str) -> InjectResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
