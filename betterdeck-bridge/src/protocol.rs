//! Event names recognized on each side of the bridge.

use std::fmt;

/// Events the injection layer sends to the companion context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutboundEvent {
    Ready,
    ColumnsChanged,
    ColumnMediaSizeUpdated,
    GotChirpForColumn,
    GotChirpInMediaModal,
    GotMediaGalleryChirpHtml,
    ClickedOnGif,
}

impl OutboundEvent {
    /// Wire name, without the namespace prefix.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::ColumnsChanged => "columnsChanged",
            Self::ColumnMediaSizeUpdated => "columnMediaSizeUpdated",
            Self::GotChirpForColumn => "gotChirpForColumn",
            Self::GotChirpInMediaModal => "gotChirpInMediaModal",
            Self::GotMediaGalleryChirpHtml => "gotMediaGalleryChirpHTML",
            Self::ClickedOnGif => "clickedOnGif",
        }
    }
}

impl fmt::Display for OutboundEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Events the companion context sends to the injection layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InboundEvent {
    GetOpenModalTweetHtml,
    GetChirpFromColumn,
    LikeChirp,
    RetweetChirp,
    ShowTdBanner,
    SettingsReady,
}

impl InboundEvent {
    /// Wire name, without the namespace prefix.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetOpenModalTweetHtml => "getOpenModalTweetHTML",
            Self::GetChirpFromColumn => "getChirpFromColumn",
            Self::LikeChirp => "likeChirp",
            Self::RetweetChirp => "retweetChirp",
            Self::ShowTdBanner => "showTDBanner",
            Self::SettingsReady => "settingsReady",
        }
    }

    /// Parses a bare (unprefixed) wire name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "getOpenModalTweetHTML" => Some(Self::GetOpenModalTweetHtml),
            "getChirpFromColumn" => Some(Self::GetChirpFromColumn),
            "likeChirp" => Some(Self::LikeChirp),
            "retweetChirp" => Some(Self::RetweetChirp),
            "showTDBanner" => Some(Self::ShowTdBanner),
            "settingsReady" => Some(Self::SettingsReady),
            _ => None,
        }
    }
}

impl fmt::Display for InboundEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
