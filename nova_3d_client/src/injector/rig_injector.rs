/// Rig injector — binds rig rows to scene items by target name.
///
/// Insertion records the rig name on the target item; removal clears the
/// binding again. Pose evaluation is out of scope: the binding is the
/// whole of what this injector maintains.

use rustc_hash::FxHashMap;
use crate::client_warn;
use crate::resource::{RigDef, RigKey};
use super::injector::{Injector, InjectorCtx};

/// Synchronizes the rig collection with scene item bindings.
pub struct RigInjector {
    /// Target item name of every rig this injector bound
    bound_targets: FxHashMap<RigKey, String>,
}

impl RigInjector {
    pub fn new() -> Self {
        Self {
            bound_targets: FxHashMap::default(),
        }
    }

    /// Number of rigs this injector currently has bound.
    pub fn bound_count(&self) -> usize {
        self.bound_targets.len()
    }
}

impl Injector for RigInjector {
    type Key = RigKey;
    type Row = RigDef;

    fn row_inserted(&mut self, key: RigKey, row: &RigDef, ctx: &mut InjectorCtx<'_>) {
        let Some(scene_key) = ctx.scene.item_key(row.target_item()) else {
            client_warn!(
                "nova3d::RigInjector",
                "Rig '{}' targets unknown item '{}'",
                row.name(),
                row.target_item()
            );
            return;
        };
        if let Some(item) = ctx.scene.item_mut(scene_key) {
            item.set_rig(Some(row.name().to_string()));
            self.bound_targets.insert(key, row.target_item().to_string());
        }
    }

    fn row_removed(&mut self, key: RigKey, _row: &RigDef, ctx: &mut InjectorCtx<'_>) {
        let Some(target) = self.bound_targets.remove(&key) else {
            return;
        };
        // The target item may have been removed first; that already
        // cleared the binding along with the item.
        if let Some(scene_key) = ctx.scene.item_key(&target) {
            if let Some(item) = ctx.scene.item_mut(scene_key) {
                item.set_rig(None);
            }
        }
    }
}

#[cfg(test)]
#[path = "rig_injector_tests.rs"]
mod tests;
