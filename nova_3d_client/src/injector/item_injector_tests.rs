use super::*;
use glam::{Mat4, Vec3};
use slotmap::SlotMap;
use crate::scene::{Color, Scene, FLAG_OUTLINED, FLAG_VISIBLE};

fn item_keys(count: usize) -> Vec<ItemKey> {
    let mut scratch: SlotMap<ItemKey, ()> = SlotMap::with_key();
    (0..count).map(|_| scratch.insert(())).collect()
}

fn test_scene() -> Scene {
    Scene::new(Color::from_hex(0))
}

// ============================================================================
// Materialization
// ============================================================================

#[test]
fn test_insert_materializes_scene_item() {
    let mut injector = ItemInjector::new();
    let mut scene = test_scene();
    let keys = item_keys(1);

    let transform = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    let row = ItemDef::new("hero")
        .with_geometry("hero_mesh")
        .with_transform(transform)
        .with_flags(FLAG_VISIBLE | FLAG_OUTLINED);

    let mut ctx = InjectorCtx {
        renderer: None,
        scene: &mut scene,
    };
    injector.row_inserted(keys[0], &row, &mut ctx);

    assert_eq!(injector.materialized_count(), 1);
    let scene_key = scene.item_key("hero").unwrap();
    let item = scene.item(scene_key).unwrap();
    assert_eq!(item.geometry(), Some("hero_mesh"));
    assert_eq!(*item.transform(), transform);
    assert!(item.has_flag(FLAG_OUTLINED));
}

#[test]
fn test_scene_name_collision_skips_materialization() {
    let mut injector = ItemInjector::new();
    let mut scene = test_scene();
    let keys = item_keys(1);

    // Something else already occupies the name
    scene
        .insert_item(crate::scene::SceneItem::new("hero"))
        .unwrap();

    let row = ItemDef::new("hero");
    let mut ctx = InjectorCtx {
        renderer: None,
        scene: &mut scene,
    };
    injector.row_inserted(keys[0], &row, &mut ctx);

    // Logged a warning, tracked nothing
    assert_eq!(injector.materialized_count(), 0);
    assert_eq!(scene.item_count(), 1);
}

// ============================================================================
// Removal
// ============================================================================

#[test]
fn test_remove_takes_item_out_of_scene() {
    let mut injector = ItemInjector::new();
    let mut scene = test_scene();
    let keys = item_keys(2);

    let hero = ItemDef::new("hero");
    let villain = ItemDef::new("villain");
    let mut ctx = InjectorCtx {
        renderer: None,
        scene: &mut scene,
    };
    injector.row_inserted(keys[0], &hero, &mut ctx);
    injector.row_inserted(keys[1], &villain, &mut ctx);
    assert_eq!(injector.materialized_count(), 2);

    injector.row_removed(keys[0], &hero, &mut ctx);

    assert_eq!(injector.materialized_count(), 1);
    assert_eq!(scene.item_count(), 1);
    assert!(scene.item_key("hero").is_none());
    assert!(scene.item_key("villain").is_some());
}

#[test]
fn test_remove_untracked_row_is_noop() {
    let mut injector = ItemInjector::new();
    let mut scene = test_scene();
    let keys = item_keys(1);

    let row = ItemDef::new("hero");
    let mut ctx = InjectorCtx {
        renderer: None,
        scene: &mut scene,
    };
    injector.row_removed(keys[0], &row, &mut ctx);

    assert_eq!(scene.item_count(), 0);
}
