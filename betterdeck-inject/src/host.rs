//! Capabilities the host application exposes, as explicit contracts.
//!
//! The host app is an external collaborator: its column manager, chirp
//! actions, template rendering, and UI effects are consumed here but never
//! owned. Each capability is a trait the embedding adapter implements;
//! nothing in this crate reaches into host internals directly, so a host
//! shape change surfaces as a lookup miss in one adapter rather than a
//! crash spread across the layer.

use betterdeck_types::{Account, Chirp, Column, ColumnKey};
use serde_json::Value;
use std::rc::Rc;

/// Read access to the host's column manager.
pub trait ColumnSource {
    /// Resolves a column by its key.
    fn column(&self, key: &ColumnKey) -> Option<Rc<Column>>;

    /// Resolves a column by its account-scoped api id, the identifier the
    /// collapsed-columns blob is keyed by.
    fn column_by_api_id(&self, api_id: &str) -> Option<Rc<Column>>;
}

/// Actions the host can perform on chirps and accounts.
pub trait ChirpActions {
    fn favorite(&self, chirp: &Rc<Chirp>);
    fn retweet(&self, chirp: &Rc<Chirp>);
    fn follow(&self, account: &Rc<Account>);
}

/// The host's template-rendering capability for media-gallery markup.
///
/// Rendering stays on the host side; this layer only asks for the result.
pub trait ChirpRenderer {
    /// Markup for showing a chirp inside the media gallery, or `None`
    /// when the host cannot render this chirp there.
    fn media_gallery_markup(&self, chirp: &Rc<Chirp>) -> Option<String>;
}

/// The host's application-level custom-event surface.
pub trait HostEventSink {
    fn trigger(&self, event: &str, payload: Value);
}

/// Per-column UI effects the host exposes.
pub trait ColumnUi {
    /// Stops the column from auto-scrolling new chirps in.
    fn pause(&self, key: &ColumnKey);
    fn unpause(&self, key: &ColumnKey);
    /// Applies or removes the collapsed presentation.
    fn set_collapsed(&self, key: &ColumnKey, collapsed: bool);
    /// Current scroll offset of the column's chirp scroller, 0 at the top.
    fn scroll_position(&self, key: &ColumnKey) -> u32;
}
