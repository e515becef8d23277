//! DOM-key to live-chirp resolution.

use crate::host::ColumnSource;
use betterdeck_types::{Chirp, ChirpId, ColumnKey};
use std::rc::Rc;
use tracing::debug;

/// Resolves opaque DOM-exposed keys to live chirps in a column's index.
///
/// Read-only: the candidate list is rebuilt on every call because the host
/// mutates its index at will. A miss is a benign outcome (the referenced
/// DOM node may simply be stale), never an error.
#[derive(Clone)]
pub struct Locator {
    columns: Rc<dyn ColumnSource>,
}

impl Locator {
    #[must_use]
    pub fn new(columns: Rc<dyn ColumnSource>) -> Self {
        Self { columns }
    }

    /// Finds the chirp with id `entity_key` in the column, searching the
    /// update index, entities nested one level deep (repost target, quoted
    /// chirp, thread members, action target), and any open detail view.
    ///
    /// Ids are compared by string equality; callers coerce numeric keys to
    /// strings at the boundary.
    #[must_use]
    pub fn locate(&self, entity_key: &ChirpId, column_key: &ColumnKey) -> Option<Rc<Chirp>> {
        let Some(column) = self.columns.column(column_key) else {
            debug!(column = %column_key, "column not found");
            return None;
        };

        let mut candidates: Vec<Rc<Chirp>> = Vec::new();
        for chirp in column.update_index.borrow().values() {
            candidates.push(Rc::clone(chirp));
            if let Some(rt) = chirp.retweeted() {
                candidates.push(rt);
            }
            if let Some(quoted) = chirp.quoted() {
                candidates.push(quoted);
            }
            candidates.extend(chirp.messages.borrow().iter().map(Rc::clone));
            if let Some(target) = chirp.target() {
                candidates.push(target);
            }
        }

        if let Some(view) = column.detail_view.borrow().as_ref() {
            if let Some(chirp) = &view.chirp {
                candidates.push(Rc::clone(chirp));
            }
            if let Some(main) = &view.main_chirp {
                candidates.push(Rc::clone(main));
            }
            candidates.extend(view.replies_before.iter().map(Rc::clone));
            candidates.extend(view.replies_after.iter().map(Rc::clone));
        }

        let found = candidates.into_iter().find(|c| &c.id == entity_key);
        if found.is_none() {
            debug!(chirp = %entity_key, column = %column_key, "chirp not found in column");
        }
        found
    }
}
