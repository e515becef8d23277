//! Outbound payload shapes.
//!
//! Payloads embedding a chirp implement [`Snapshot`] so the cycle-safe
//! walk covers the whole envelope; payloads made of plain wire structs
//! derive `Serialize` and go out through `publish_plain`.

use betterdeck_bridge::{NodeIdentity, Snapshot, Walker};
use betterdeck_types::{Chirp, ChirpId, ColumnKey, MediaPreviewSize};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::rc::Rc;

/// `gotChirpInMediaModal`: `{ chirp }`.
pub(crate) struct ChirpPayload {
    pub chirp: Rc<Chirp>,
}

impl Snapshot for ChirpPayload {
    fn identity(&self) -> NodeIdentity {
        NodeIdentity::addr(self)
    }

    fn record(&self, walker: &mut Walker) -> Value {
        let mut map = Map::new();
        map.insert("chirp".into(), walker.child(self.chirp.as_ref()));
        Value::Object(map)
    }
}

/// `gotChirpForColumn`: `{ chirp, colKey }`.
pub(crate) struct ChirpForColumn {
    pub chirp: Rc<Chirp>,
    pub col_key: ColumnKey,
}

impl Snapshot for ChirpForColumn {
    fn identity(&self) -> NodeIdentity {
        NodeIdentity::addr(self)
    }

    fn record(&self, walker: &mut Walker) -> Value {
        let mut map = Map::new();
        map.insert("chirp".into(), walker.child(self.chirp.as_ref()));
        map.insert("colKey".into(), Value::String(self.col_key.to_string()));
        Value::Object(map)
    }
}

/// `gotMediaGalleryChirpHTML`: `{ markup, chirp, modalHtml, colKey }`.
pub(crate) struct MediaGalleryPayload {
    pub markup: Option<String>,
    pub chirp: Rc<Chirp>,
    pub modal_html: Option<String>,
    pub col_key: ColumnKey,
}

impl Snapshot for MediaGalleryPayload {
    fn identity(&self) -> NodeIdentity {
        NodeIdentity::addr(self)
    }

    fn record(&self, walker: &mut Walker) -> Value {
        let mut map = Map::new();
        if let Some(markup) = &self.markup {
            map.insert("markup".into(), Value::String(markup.clone()));
        }
        map.insert("chirp".into(), walker.child(self.chirp.as_ref()));
        if let Some(html) = &self.modal_html {
            map.insert("modalHtml".into(), Value::String(html.clone()));
        }
        map.insert("colKey".into(), Value::String(self.col_key.to_string()));
        Value::Object(map)
    }
}

/// Video description sent with `clickedOnGif`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GifVideo {
    pub src: String,
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `clickedOnGif`: `{ tweetKey, colKey, video }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct GifClickPayload {
    #[serde(rename = "tweetKey")]
    pub tweet_key: ChirpId,
    #[serde(rename = "colKey")]
    pub col_key: ColumnKey,
    pub video: GifVideo,
}

/// `columnMediaSizeUpdated`: `{ id, size }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSizeUpdate {
    pub id: ColumnKey,
    pub size: MediaPreviewSize,
}
