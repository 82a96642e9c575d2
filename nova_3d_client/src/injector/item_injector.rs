/// Item injector — materializes item rows as scene items.
///
/// Insertion builds a SceneItem from the definition and puts it into the
/// scene; removal takes it out again. The injector keeps the row-key to
/// scene-key mapping so removal never has to search.

use rustc_hash::FxHashMap;
use crate::client_warn;
use crate::resource::{ItemDef, ItemKey};
use crate::scene::{SceneItem, SceneItemKey};
use super::injector::{Injector, InjectorCtx};

/// Synchronizes the item collection with the scene.
pub struct ItemInjector {
    /// Scene key of every item this injector materialized
    scene_keys: FxHashMap<ItemKey, SceneItemKey>,
}

impl ItemInjector {
    pub fn new() -> Self {
        Self {
            scene_keys: FxHashMap::default(),
        }
    }

    /// Number of items this injector currently holds in the scene.
    pub fn materialized_count(&self) -> usize {
        self.scene_keys.len()
    }
}

impl Injector for ItemInjector {
    type Key = ItemKey;
    type Row = ItemDef;

    fn row_inserted(&mut self, key: ItemKey, row: &ItemDef, ctx: &mut InjectorCtx<'_>) {
        let mut item = SceneItem::new(row.name());
        item.set_transform(*row.transform());
        item.set_geometry(row.geometry().map(String::from));
        item.set_flags(row.flags());

        match ctx.scene.insert_item(item) {
            Ok(scene_key) => {
                self.scene_keys.insert(key, scene_key);
            }
            Err(error) => {
                client_warn!(
                    "nova3d::ItemInjector",
                    "Item '{}' not materialized: {}",
                    row.name(),
                    error
                );
            }
        }
    }

    fn row_removed(&mut self, key: ItemKey, _row: &ItemDef, ctx: &mut InjectorCtx<'_>) {
        if let Some(scene_key) = self.scene_keys.remove(&key) {
            ctx.scene.remove_item(scene_key);
        }
    }
}

#[cfg(test)]
#[path = "item_injector_tests.rs"]
mod tests;
