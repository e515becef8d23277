//! Columns and detail views as the host's column manager exposes them.

use crate::{Chirp, ChirpId, ColumnKey, UpdateKey};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Media preview size a column renders attachments at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaPreviewSize {
    Off,
    Small,
    #[default]
    Medium,
    Large,
}

impl MediaPreviewSize {
    /// Wire name of the size.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// The host UI state focusing on one chirp plus its surrounding thread.
#[derive(Debug, Default)]
pub struct DetailView {
    /// The chirp the detail view was opened on.
    pub chirp: Option<Rc<Chirp>>,
    /// The conversation root, when it differs from the opened chirp.
    pub main_chirp: Option<Rc<Chirp>>,
    /// Replies shown above the focused chirp.
    pub replies_before: Vec<Rc<Chirp>>,
    /// Replies shown below the focused chirp.
    pub replies_after: Vec<Rc<Chirp>>,
}

/// A named collection of chirps maintained by the host application.
///
/// The update index maps index slots to chirps; insertion order carries no
/// meaning. The host mutates both the index and the detail view at any
/// time, so holders of a `Rc<Column>` must re-read on every use.
#[derive(Debug)]
pub struct Column {
    pub key: ColumnKey,
    /// Host-side account-scoped id, used to persist per-column flags.
    pub api_id: Option<String>,
    pub media_preview_size: Cell<MediaPreviewSize>,
    pub update_index: RefCell<HashMap<UpdateKey, Rc<Chirp>>>,
    pub detail_view: RefCell<Option<DetailView>>,
}

impl Column {
    /// Creates an empty column.
    #[must_use]
    pub fn new(key: impl Into<ColumnKey>) -> Self {
        Self {
            key: key.into(),
            api_id: None,
            media_preview_size: Cell::new(MediaPreviewSize::default()),
            update_index: RefCell::new(HashMap::new()),
            detail_view: RefCell::new(None),
        }
    }

    /// Inserts a chirp into the update index under the given slot key.
    pub fn index(&self, key: impl Into<UpdateKey>, chirp: Rc<Chirp>) {
        self.update_index.borrow_mut().insert(key.into(), chirp);
    }

    /// Looks up an indexed chirp by its id (not its slot key).
    #[must_use]
    pub fn indexed_by_id(&self, id: &ChirpId) -> Option<Rc<Chirp>> {
        self.update_index
            .borrow()
            .values()
            .find(|c| &c.id == id)
            .map(Rc::clone)
    }
}

/// Wire descriptor for a column, sent with `columnsChanged`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub id: ColumnKey,
    #[serde(rename = "mediaSize")]
    pub media_size: MediaPreviewSize,
}
