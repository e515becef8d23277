//! The persisted collapsed-columns blob.

use crate::{KeyValue, StoreResult};
use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

/// Fixed store key the collapsed-columns blob lives under.
pub const COLLAPSED_COLUMNS_KEY: &str = "btd_collapsed_columns";

/// Flat JSON object mapping column api-ids to collapsed flags.
///
/// A column is collapsed when its id maps to `true`; uncollapsing deletes
/// the entry outright so the blob only ever lists collapsed columns. A
/// missing or corrupt blob reads as "nothing collapsed".
pub struct CollapsedColumns {
    store: Rc<dyn KeyValue>,
}

impl CollapsedColumns {
    #[must_use]
    pub fn new(store: Rc<dyn KeyValue>) -> Self {
        Self { store }
    }

    fn load(&self) -> HashMap<String, bool> {
        let Some(raw) = self.store.get(COLLAPSED_COLUMNS_KEY) else {
            return HashMap::new();
        };
        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(err) => {
                debug!(%err, "corrupt collapsed-columns blob, treating as empty");
                HashMap::new()
            }
        }
    }

    fn save(&self, map: &HashMap<String, bool>) -> StoreResult<()> {
        let raw = serde_json::to_string(map)?;
        self.store.set(COLLAPSED_COLUMNS_KEY, &raw)
    }

    /// Whether the column with this api-id is recorded as collapsed.
    #[must_use]
    pub fn is_collapsed(&self, api_id: &str) -> bool {
        self.load().get(api_id).copied().unwrap_or(false)
    }

    /// Records or clears the collapsed flag for a column.
    pub fn set_collapsed(&self, api_id: &str, collapsed: bool) -> StoreResult<()> {
        let mut map = self.load();
        if collapsed {
            map.insert(api_id.to_string(), true);
        } else {
            map.remove(api_id);
        }
        self.save(&map)
    }

    /// Api-ids of every column recorded as collapsed.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .load()
            .into_iter()
            .filter(|(_, collapsed)| *collapsed)
            .map(|(id, _)| id)
            .collect();
        ids.sort();
        ids
    }
}
