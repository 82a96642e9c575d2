/// Scene — the render-graph root the client hands to its renderer.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys, plus a name
/// index for lookup by item name. The background color is fixed at
/// creation; everything else is populated by the item injector.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use crate::error::Nova3dResult;
use crate::client_bail;
use super::color::Color;
use super::scene_item::{SceneItem, SceneItemKey};

/// A renderable scene containing SceneItems.
///
/// Items are managed via stable keys (SceneItemKey).
/// Keys remain valid even after other items are removed.
pub struct Scene {
    /// Background clear color, set once at creation
    background: Color,
    /// Scene items stored in a slot map for O(1) insert/remove
    items: SlotMap<SceneItemKey, SceneItem>,
    /// Name index for lookup by item name
    names: FxHashMap<String, SceneItemKey>,
}

impl Scene {
    /// Create a new empty scene with the given background color.
    pub fn new(background: Color) -> Self {
        Self {
            background,
            items: SlotMap::with_key(),
            names: FxHashMap::default(),
        }
    }

    /// Background clear color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Add an item to the scene.
    ///
    /// Returns a stable key that remains valid until the item is removed.
    ///
    /// # Errors
    ///
    /// Fails if an item with the same name already exists.
    pub fn insert_item(&mut self, item: SceneItem) -> Nova3dResult<SceneItemKey> {
        if self.names.contains_key(item.name()) {
            client_bail!("nova3d::Scene", "SceneItem '{}' already exists", item.name());
        }
        let name = item.name().to_string();
        let key = self.items.insert(item);
        self.names.insert(name, key);
        Ok(key)
    }

    /// Remove an item from the scene, returning it.
    ///
    /// Returns None if the key is invalid.
    pub fn remove_item(&mut self, key: SceneItemKey) -> Option<SceneItem> {
        let item = self.items.remove(key)?;
        self.names.remove(item.name());
        Some(item)
    }

    /// Get an item by key.
    pub fn item(&self, key: SceneItemKey) -> Option<&SceneItem> {
        self.items.get(key)
    }

    /// Get a mutable item by key.
    pub fn item_mut(&mut self, key: SceneItemKey) -> Option<&mut SceneItem> {
        self.items.get_mut(key)
    }

    /// Look up an item key by name.
    pub fn item_key(&self, name: &str) -> Option<SceneItemKey> {
        self.names.get(name).copied()
    }

    /// Iterate over all items (key, item).
    pub fn items(&self) -> impl Iterator<Item = (SceneItemKey, &SceneItem)> {
        self.items.iter()
    }

    /// Number of items in the scene.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
        self.names.clear();
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
