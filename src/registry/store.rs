//! Build-scoped registry storage.
//!
//! Holds one [`PageRecord`] per page for the duration of a build.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::types::{PageKey, PageRecord};

/// Thread-safe storage for per-page dependency records.
///
/// # Lifecycle
///
/// Records are created lazily on first reference and live until the next
/// [`clear`](Self::clear). The host must clear the store once per build,
/// before any page renders; otherwise records from the previous build leak
/// into the next one.
///
/// # Thread Safety
///
/// Each call takes the lock for its own duration only. Registering bricks
/// for the same page from several threads keeps every entry, but the
/// insertion order (and therefore the output order) is then unspecified.
#[derive(Debug, Default)]
pub struct RegistryStore {
    pages: RwLock<FxHashMap<PageKey, PageRecord>>,
}

impl RegistryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every record. Returns how many records were dropped.
    ///
    /// Call this at the start of each build.
    pub fn clear(&self) -> usize {
        let mut pages = self.pages.write();
        let count = pages.len();
        pages.clear();
        count
    }

    /// Run `f` on the record for `key`, creating an empty one first if needed.
    pub fn with_page<R>(&self, key: &PageKey, f: impl FnOnce(&mut PageRecord) -> R) -> R {
        let mut pages = self.pages.write();
        f(pages.entry(key.clone()).or_default())
    }

    /// Snapshot of the record for `key`, creating an empty one first if needed.
    pub fn get_or_create(&self, key: &PageKey) -> PageRecord {
        self.with_page(key, |record| record.clone())
    }

    /// Snapshot of the record for `key`, if the page was ever referenced.
    pub fn get(&self, key: &PageKey) -> Option<PageRecord> {
        self.pages.read().get(key).cloned()
    }

    pub fn contains(&self, key: &PageKey) -> bool {
        self.pages.read().contains_key(key)
    }

    /// Get the number of pages.
    pub fn len(&self) -> usize {
        self.pages.read().len()
    }

    /// Check if the store has any data.
    pub fn is_empty(&self) -> bool {
        self.pages.read().is_empty()
    }
}
