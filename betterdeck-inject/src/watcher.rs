//! DOM-insertion reactions.
//!
//! The concrete binding to a mutation-observation API lives in the
//! embedding adapter; this module only sees inserted nodes through the
//! [`NodeMarkup`] view and the document through [`DocumentMarkup`]. Every
//! resolution miss skips the node silently, since an uncaught exception inside
//! an observer callback can deregister future notifications in some
//! hosts, so nothing on this path is allowed to fail loudly.

use crate::locator::Locator;
use crate::payload::{ChirpForColumn, ChirpPayload};
use betterdeck_bridge::{OutboundEvent, Publisher};
use betterdeck_types::{ChirpId, ColumnKey};

/// Markup markers of one inserted DOM node.
pub trait NodeMarkup {
    /// Whether the node carries the media-modal marker class.
    fn is_media_modal(&self) -> bool;

    /// Entity key attribute on the node itself, if any.
    fn entity_key(&self) -> Option<ChirpId>;

    /// Entity key of the first key-bearing descendant, if any.
    fn descendant_entity_key(&self) -> Option<ChirpId>;

    /// Column key of the nearest enclosing column container, if any.
    fn enclosing_column_key(&self) -> Option<ColumnKey>;
}

/// Document-wide markup lookups the modal path needs.
pub trait DocumentMarkup {
    /// The column whose markup currently contains the keyed entity.
    fn column_containing(&self, entity_key: &ChirpId) -> Option<ColumnKey>;
}

/// What an insertion turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    PublishedInModal,
    PublishedInColumn,
    Skipped,
}

/// Watches node insertions and republishes the chirps they display.
pub struct Watcher {
    locator: Locator,
    publisher: Publisher,
}

impl Watcher {
    #[must_use]
    pub fn new(locator: Locator, publisher: Publisher) -> Self {
        Self { locator, publisher }
    }

    /// Reacts to one inserted node: media-modal nodes publish
    /// `gotChirpInMediaModal`, key-bearing nodes publish
    /// `gotChirpForColumn`, everything else is ignored.
    pub fn node_inserted(
        &self,
        node: &dyn NodeMarkup,
        document: &dyn DocumentMarkup,
    ) -> Insertion {
        if node.is_media_modal() {
            let Some(key) = node.descendant_entity_key() else {
                return Insertion::Skipped;
            };
            let Some(col_key) = document.column_containing(&key) else {
                return Insertion::Skipped;
            };
            let Some(chirp) = self.locator.locate(&key, &col_key) else {
                return Insertion::Skipped;
            };
            self.publisher
                .publish(OutboundEvent::GotChirpInMediaModal, &ChirpPayload { chirp });
            return Insertion::PublishedInModal;
        }

        let Some(key) = node.entity_key() else {
            return Insertion::Skipped;
        };
        let Some(col_key) = node.enclosing_column_key() else {
            return Insertion::Skipped;
        };
        let Some(chirp) = self.locator.locate(&key, &col_key) else {
            return Insertion::Skipped;
        };
        self.publisher.publish(
            OutboundEvent::GotChirpForColumn,
            &ChirpForColumn { chirp, col_key },
        );
        Insertion::PublishedInColumn
    }
}
