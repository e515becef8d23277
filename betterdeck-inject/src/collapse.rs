//! Column collapsing with persisted flags.

use crate::host::{ColumnSource, ColumnUi};
use crate::settings::Settings;
use crate::InjectResult;
use betterdeck_store::CollapsedColumns;
use betterdeck_types::ColumnKey;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use tracing::debug;

/// Collapses and restores columns, keeping the persisted flags in step
/// with the host UI.
///
/// The persisted blob is keyed by the column's account-scoped api id so
/// flags survive the session-scoped column keys changing; the in-memory
/// set tracks what is currently collapsed for toggling.
pub struct CollapseController {
    columns: Rc<dyn ColumnSource>,
    ui: Rc<dyn ColumnUi>,
    flags: CollapsedColumns,
    settings: Rc<RefCell<Settings>>,
    live: RefCell<HashSet<ColumnKey>>,
}

impl CollapseController {
    #[must_use]
    pub fn new(
        columns: Rc<dyn ColumnSource>,
        ui: Rc<dyn ColumnUi>,
        flags: CollapsedColumns,
        settings: Rc<RefCell<Settings>>,
    ) -> Self {
        Self {
            columns,
            ui,
            flags,
            settings,
            live: RefCell::new(HashSet::new()),
        }
    }

    /// Whether the column is currently collapsed.
    #[must_use]
    pub fn is_collapsed(&self, key: &ColumnKey) -> bool {
        self.live.borrow().contains(key)
    }

    /// Collapses a column, persisting its flag and optionally pausing it
    /// when it sits at the top of its scroller.
    pub fn collapse(&self, key: &ColumnKey) -> InjectResult<()> {
        let settings = self.settings.borrow().clone();
        if !settings.collapse_columns {
            return Ok(());
        }
        let Some(column) = self.columns.column(key) else {
            debug!(column = %key, "cannot collapse unknown column");
            return Ok(());
        };

        if settings.collapse_columns_pause && self.ui.scroll_position(key) == 0 {
            self.ui.pause(key);
        }
        self.ui.set_collapsed(key, true);
        self.live.borrow_mut().insert(key.clone());
        if let Some(api_id) = &column.api_id {
            self.flags.set_collapsed(api_id, true)?;
        }
        Ok(())
    }

    /// Uncollapses a column whose flag is set, optionally unpausing it
    /// when it is scrolled away from the top.
    pub fn uncollapse(&self, key: &ColumnKey) -> InjectResult<()> {
        let settings = self.settings.borrow().clone();
        if !settings.collapse_columns {
            return Ok(());
        }
        let Some(column) = self.columns.column(key) else {
            debug!(column = %key, "cannot uncollapse unknown column");
            return Ok(());
        };

        let flagged = column
            .api_id
            .as_deref()
            .is_some_and(|api_id| self.flags.is_collapsed(api_id));
        if !flagged && !self.is_collapsed(key) {
            return Ok(());
        }

        if settings.uncollapse_columns_unpause && self.ui.scroll_position(key) != 0 {
            self.ui.unpause(key);
        }
        self.ui.set_collapsed(key, false);
        self.live.borrow_mut().remove(key);
        if let Some(api_id) = &column.api_id {
            self.flags.set_collapsed(api_id, false)?;
        }
        Ok(())
    }

    /// Collapses or uncollapses depending on the current state.
    pub fn toggle(&self, key: &ColumnKey) -> InjectResult<()> {
        if self.is_collapsed(key) {
            self.uncollapse(key)
        } else {
            self.collapse(key)
        }
    }

    /// Applies persisted flags at startup. Flags whose column no longer
    /// exists are dropped from the blob.
    pub fn restore(&self) -> InjectResult<()> {
        for api_id in self.flags.ids() {
            match self.columns.column_by_api_id(&api_id) {
                Some(column) => self.collapse(&column.key)?,
                None => {
                    debug!(api_id = %api_id, "dropping collapsed flag for missing column");
                    self.flags.set_collapsed(&api_id, false)?;
                }
            }
        }
        Ok(())
    }
}
