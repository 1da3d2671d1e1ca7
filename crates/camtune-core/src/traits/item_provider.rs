//! ItemProvider trait — the record collection seam.
//!
//! The engine never fetches, caches, or persists records. Whatever owns the
//! item database (a game server's in-memory tables, a test fixture)
//! implements this trait and hands the engine a mutable view for the
//! duration of one pass.

use rustc_hash::FxHashMap;

use crate::model::ItemRecord;

/// Provider of the mutable item record mapping.
pub trait ItemProvider {
    /// Borrow the full item mapping for in-place mutation.
    ///
    /// Iteration order over the mapping is unspecified; the adjustment pass
    /// does not depend on it.
    fn items_mut(&mut self) -> &mut FxHashMap<String, ItemRecord>;
}

/// Owning in-memory implementation, used by hosts that load the item
/// database themselves and by tests.
#[derive(Debug, Default)]
pub struct InMemoryItems {
    items: FxHashMap<String, ItemRecord>,
}

impl InMemoryItems {
    /// Create a provider from an existing mapping.
    pub fn new(items: FxHashMap<String, ItemRecord>) -> Self {
        Self { items }
    }

    /// Insert a record, replacing any existing record with the same id.
    pub fn insert(&mut self, id: impl Into<String>, record: ItemRecord) {
        self.items.insert(id.into(), record);
    }

    /// Read-only access for assertions after a pass.
    pub fn items(&self) -> &FxHashMap<String, ItemRecord> {
        &self.items
    }
}

impl ItemProvider for InMemoryItems {
    fn items_mut(&mut self) -> &mut FxHashMap<String, ItemRecord> {
        &mut self.items
    }
}
