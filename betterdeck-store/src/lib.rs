//! Page-scoped persistent key-value storage for BetterDeck.
//!
//! The injection layer persists exactly one kind of state: small flat JSON
//! blobs under fixed keys in the page's string store (the localStorage
//! boundary). This crate provides that boundary as a trait with in-memory
//! and file-backed implementations, plus the collapsed-columns blob built
//! on top of it.

mod collapsed;
mod error;
mod kv;

pub use collapsed::{CollapsedColumns, COLLAPSED_COLUMNS_KEY};
pub use error::{StoreError, StoreResult};
pub use kv::{FileStore, KeyValue, MemoryStore};
