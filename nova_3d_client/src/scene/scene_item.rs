/// Scene item types for the scene root.
///
/// A SceneItem is the engine-side representation of a game item: a named
/// transform with an optional geometry reference, an optional rig binding,
/// and render flags. Items are materialized exclusively by the item
/// injector from the client's item collection.

use glam::Mat4;
use slotmap::new_key_type;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a SceneItem within a Scene.
    ///
    /// Keys remain valid even after other items are removed.
    /// A key becomes invalid only when its own item is removed.
    pub struct SceneItemKey;
}

// ===== FLAGS =====

/// Scene item flags (bitfield)
pub const FLAG_VISIBLE: u64     = 1 << 0;
/// Item casts shadows
pub const FLAG_CAST_SHADOW: u64 = 1 << 1;
/// Item is drawn through the outline pass
pub const FLAG_OUTLINED: u64    = 1 << 2;
// Bits 3-63 reserved for future extensions

// ===== SCENE ITEM =====

/// A named, renderable entry in the scene.
#[derive(Debug, Clone)]
pub struct SceneItem {
    /// Unique name within the scene
    name: String,
    /// World transform
    transform: Mat4,
    /// Name of the geometry this item draws, if any
    geometry: Option<String>,
    /// Name of the rig bound to this item, if any
    rig: Option<String>,
    /// Render flags (FLAG_* bitfield)
    flags: u64,
}

impl SceneItem {
    /// Create a visible item at the origin with no geometry or rig.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Mat4::IDENTITY,
            geometry: None,
            rig: None,
            flags: FLAG_VISIBLE,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
    }

    pub fn geometry(&self) -> Option<&str> {
        self.geometry.as_deref()
    }

    pub fn set_geometry(&mut self, geometry: Option<String>) {
        self.geometry = geometry;
    }

    pub fn rig(&self) -> Option<&str> {
        self.rig.as_deref()
    }

    pub fn set_rig(&mut self, rig: Option<String>) {
        self.rig = rig;
    }

    pub fn flags(&self) -> u64 {
        self.flags
    }

    pub fn set_flags(&mut self, flags: u64) {
        self.flags = flags;
    }

    /// Test a single flag bit.
    pub fn has_flag(&self, flag: u64) -> bool {
        self.flags & flag != 0
    }
}

#[cfg(test)]
#[path = "scene_item_tests.rs"]
mod tests;
