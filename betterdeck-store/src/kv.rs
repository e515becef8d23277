//! The page-scoped string store boundary.

use crate::StoreResult;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A persistent string-to-string store scoped to the host page.
///
/// In the browser this is localStorage; adapters bind it. Reads are
/// infallible (a missing key is `None`); writes report IO failures so
/// callers can decide whether staleness matters.
pub trait KeyValue {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// In-memory store for tests and headless embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// File-backed store: one JSON object file holding every key.
///
/// The whole file is loaded on open and rewritten on every mutation; the
/// blobs involved are a handful of flags, not a database. An unreadable
/// or unparseable file degrades to an empty store with a warning rather
/// than failing the embedding.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RefCell<HashMap<String, String>>,
}

impl FileStore {
    /// Opens the store at `path`, creating an empty one if the file does
    /// not exist yet.
    #[must_use]
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<HashMap<String, String>>(&contents) {
                Ok(map) => map,
                Err(err) => {
                    warn!(path = %path.display(), %err, "unparseable store file, starting empty");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self {
            path,
            entries: RefCell::new(entries),
        }
    }

    fn persist(&self) -> StoreResult<()> {
        let contents = serde_json::to_string_pretty(&*self.entries.borrow())?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl KeyValue for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.borrow_mut().remove(key);
        self.persist()
    }
}
