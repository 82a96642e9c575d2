/// Rig definitions — the rows of the client's rig collection.
///
/// A RigDef names a skeleton and the scene item it should attach to.
/// Pose evaluation happens elsewhere; the rig injector only records the
/// binding on the target item.

use slotmap::new_key_type;
use crate::collection::CollectionRow;

new_key_type! {
    /// Stable key for a RigDef within the rig collection.
    pub struct RigKey;
}

/// A named rig definition bound to a target item by name.
#[derive(Debug, Clone)]
pub struct RigDef {
    /// Unique name within the rig collection
    name: String,
    /// Name of the item this rig attaches to
    target_item: String,
    /// Number of bones in the skeleton
    bone_count: u32,
}

impl RigDef {
    pub fn new(
        name: impl Into<String>,
        target_item: impl Into<String>,
        bone_count: u32,
    ) -> Self {
        Self {
            name: name.into(),
            target_item: target_item.into(),
            bone_count,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target_item(&self) -> &str {
        &self.target_item
    }

    pub fn bone_count(&self) -> u32 {
        self.bone_count
    }
}

impl CollectionRow for RigDef {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
#[path = "rig_tests.rs"]
mod tests;
