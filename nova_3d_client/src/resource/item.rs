/// Item definitions — the rows of the client's item collection.
///
/// An ItemDef describes a game item before it is materialized into the
/// scene: a name, an optional geometry reference, a world transform, and
/// render flags. The item injector turns rows into SceneItems.

use glam::Mat4;
use slotmap::new_key_type;
use crate::collection::CollectionRow;
use crate::scene::FLAG_VISIBLE;

new_key_type! {
    /// Stable key for an ItemDef within the item collection.
    pub struct ItemKey;
}

/// A named item definition.
#[derive(Debug, Clone)]
pub struct ItemDef {
    /// Unique name within the item collection
    name: String,
    /// Name of the geometry this item draws, if any
    geometry: Option<String>,
    /// World transform
    transform: Mat4,
    /// Render flags (scene FLAG_* bitfield)
    flags: u64,
}

impl ItemDef {
    /// Create a visible item definition at the origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            geometry: None,
            transform: Mat4::IDENTITY,
            flags: FLAG_VISIBLE,
        }
    }

    /// Set the geometry reference.
    pub fn with_geometry(mut self, geometry: impl Into<String>) -> Self {
        self.geometry = Some(geometry.into());
        self
    }

    /// Set the world transform.
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    /// Set the render flags.
    pub fn with_flags(mut self, flags: u64) -> Self {
        self.flags = flags;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometry(&self) -> Option<&str> {
        self.geometry.as_deref()
    }

    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    pub fn flags(&self) -> u64 {
        self.flags
    }
}

impl CollectionRow for ItemDef {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
