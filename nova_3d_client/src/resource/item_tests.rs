use glam::{Mat4, Vec3};
use crate::scene::{FLAG_CAST_SHADOW, FLAG_OUTLINED, FLAG_VISIBLE};
use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_item_defaults() {
    let item = ItemDef::new("hero");
    assert_eq!(item.name(), "hero");
    assert!(item.geometry().is_none());
    assert_eq!(*item.transform(), Mat4::IDENTITY);
    assert_eq!(item.flags(), FLAG_VISIBLE);
}

// ============================================================================
// Builders
// ============================================================================

#[test]
fn test_with_geometry() {
    let item = ItemDef::new("hero").with_geometry("hero_mesh");
    assert_eq!(item.geometry(), Some("hero_mesh"));
}

#[test]
fn test_with_transform() {
    let transform = Mat4::from_translation(Vec3::new(10.0, 0.0, -5.0));
    let item = ItemDef::new("hero").with_transform(transform);
    assert_eq!(*item.transform(), transform);
}

#[test]
fn test_with_flags() {
    let item = ItemDef::new("hero").with_flags(FLAG_VISIBLE | FLAG_CAST_SHADOW | FLAG_OUTLINED);
    assert_eq!(item.flags() & FLAG_CAST_SHADOW, FLAG_CAST_SHADOW);
    assert_eq!(item.flags() & FLAG_OUTLINED, FLAG_OUTLINED);
}

#[test]
fn test_builders_chain() {
    let item = ItemDef::new("hero")
        .with_geometry("hero_mesh")
        .with_transform(Mat4::from_scale(Vec3::splat(2.0)))
        .with_flags(FLAG_VISIBLE);

    assert_eq!(item.name(), "hero");
    assert_eq!(item.geometry(), Some("hero_mesh"));
}
