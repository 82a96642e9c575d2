/// Collection — a named row store with deferred injector dispatch.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys, plus a name
/// index for lookup by row name. Row changes are not applied to engine
/// state immediately: they are recorded as CollectionEvents and replayed
/// into the attached Injector on the next client update, so game code
/// can mutate collections at any point of the frame.

use rustc_hash::FxHashMap;
use slotmap::{Key, SlotMap};
use crate::error::Nova3dResult;
use crate::client_bail;
use crate::injector::{Injector, InjectorCtx};

/// Rows stored in a collection expose a unique name.
pub trait CollectionRow {
    /// Unique name of this row within its collection.
    fn name(&self) -> &str;
}

/// A deferred row change, drained by `dispatch_events`.
///
/// Removal carries the evicted row so the injector can undo side
/// effects by name after the collection has already let go of it.
pub enum CollectionEvent<K: Key, T> {
    /// A row was inserted; it lives in the collection under this key.
    Inserted(K),
    /// A row was removed; the event owns the evicted row.
    Removed(K, T),
}

/// A named row store accepting one injection strategy.
///
/// Rows are managed via stable keys. Keys remain valid even after other
/// rows are removed. Duplicate names are rejected.
pub struct Collection<K: Key, T> {
    /// Collection label used in diagnostics ("geometries", "items", ...)
    label: &'static str,
    /// Rows stored in a slot map for O(1) insert/remove
    rows: SlotMap<K, T>,
    /// Name index for lookup by row name
    names: FxHashMap<String, K>,
    /// Row changes pending injector dispatch
    events: Vec<CollectionEvent<K, T>>,
    /// Injection strategy, at most one
    injector: Option<Box<dyn Injector<Key = K, Row = T>>>,
}

impl<K: Key, T: CollectionRow> Collection<K, T> {
    /// Create a new empty collection.
    ///
    /// # Arguments
    ///
    /// * `label` - Collection name used in diagnostics
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            rows: SlotMap::with_key(),
            names: FxHashMap::default(),
            events: Vec::new(),
            injector: None,
        }
    }

    /// Collection label used in diagnostics.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Add a row to the collection.
    ///
    /// Returns a stable key that remains valid until the row is removed.
    /// The attached injector sees the row on the next dispatch.
    ///
    /// # Errors
    ///
    /// Fails if a row with the same name already exists.
    pub fn insert(&mut self, row: T) -> Nova3dResult<K> {
        if self.names.contains_key(row.name()) {
            client_bail!(
                "nova3d::Collection",
                "{} row '{}' already exists",
                self.label,
                row.name()
            );
        }
        let name = row.name().to_string();
        let key = self.rows.insert(row);
        self.names.insert(name, key);
        self.events.push(CollectionEvent::Inserted(key));
        Ok(key)
    }

    /// Remove a row by name.
    ///
    /// The row leaves the collection immediately (its name is free for
    /// reuse); the attached injector sees the removal on the next
    /// dispatch. Returns false if no row has that name.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(key) = self.names.remove(name) else {
            return false;
        };
        if let Some(row) = self.rows.remove(key) {
            self.events.push(CollectionEvent::Removed(key, row));
        }
        true
    }

    /// Get a row by name.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.names.get(name).and_then(|&key| self.rows.get(key))
    }

    /// Get a row by key.
    pub fn get_by_key(&self, key: K) -> Option<&T> {
        self.rows.get(key)
    }

    /// Look up a row key by name.
    pub fn key_of(&self, name: &str) -> Option<K> {
        self.names.get(name).copied()
    }

    /// Iterate over all rows (key, row).
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> {
        self.rows.iter()
    }

    /// Number of rows in the collection.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the collection holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of row changes waiting for the next dispatch.
    pub fn pending_event_count(&self) -> usize {
        self.events.len()
    }

    /// Attach an injection strategy, replacing any previous one.
    ///
    /// Pending events are discarded and every row currently present is
    /// queued as an insert, so a late-attached injector starts from the
    /// collection's current state instead of silently skipping rows.
    pub fn set_injector(&mut self, injector: Box<dyn Injector<Key = K, Row = T>>) {
        self.events.clear();
        for key in self.rows.keys() {
            self.events.push(CollectionEvent::Inserted(key));
        }
        self.injector = Some(injector);
    }

    /// True if an injection strategy is attached.
    pub fn has_injector(&self) -> bool {
        self.injector.is_some()
    }

    /// Detach the injection strategy, if any.
    pub fn clear_injector(&mut self) {
        self.injector = None;
    }

    /// Drain pending events into the attached injector.
    ///
    /// Called from the client's update pass. Without an injector the
    /// queue is dropped: a later attach replays the surviving rows, so
    /// nothing is lost. Insert events whose row was removed before the
    /// dispatch resolve to nothing and are skipped.
    pub fn dispatch_events(&mut self, ctx: &mut InjectorCtx<'_>) {
        let Some(mut injector) = self.injector.take() else {
            self.events.clear();
            return;
        };
        let events = std::mem::take(&mut self.events);
        for event in events {
            match event {
                CollectionEvent::Inserted(key) => {
                    if let Some(row) = self.rows.get(key) {
                        injector.row_inserted(key, row, ctx);
                    }
                }
                CollectionEvent::Removed(key, row) => {
                    injector.row_removed(key, &row, ctx);
                }
            }
        }
        self.injector = Some(injector);
    }

    /// Remove all rows and pending events.
    ///
    /// Bypasses injector dispatch entirely; used during client disposal
    /// when engine state is being torn down wholesale anyway.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.names.clear();
        self.events.clear();
    }
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
