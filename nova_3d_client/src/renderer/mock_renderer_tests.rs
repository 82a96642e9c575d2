use super::*;
use crate::renderer::{PowerPreference, ShadowMapType};
use crate::scene::{Color, SceneItem};

fn surface(width: u32, height: u32) -> CanvasSurface {
    CanvasSurface {
        width,
        height,
        display_handle: None,
        window_handle: None,
    }
}

// ============================================================================
// Recording
// ============================================================================

#[test]
fn test_set_size_is_recorded() {
    let mut renderer = MockRenderer::new();
    let probe = renderer.probe();

    renderer.set_size(800, 600);
    renderer.set_size(1920, 1080);

    assert_eq!(renderer.size(), (1920, 1080));
    assert_eq!(probe.set_size_calls(), vec![(800, 600), (1920, 1080)]);
}

#[test]
fn test_shadow_and_auto_reset_are_recorded() {
    let mut renderer = MockRenderer::new();
    let probe = renderer.probe();

    renderer.set_shadow_config(ShadowConfig {
        enabled: true,
        map_type: ShadowMapType::PcfSoft,
    });
    renderer.set_stats_auto_reset(false);

    assert!(renderer.shadow_config().enabled);
    assert_eq!(probe.shadow_configs().len(), 1);
    assert_eq!(probe.auto_reset_calls(), vec![false]);
}

#[test]
fn test_geometry_journal() {
    let mut renderer = MockRenderer::new();
    let probe = renderer.probe();

    let geometry = GeometryDef::new(
        "tri",
        vec![glam::Vec3::ZERO, glam::Vec3::X, glam::Vec3::Y],
        vec![0, 1, 2],
    )
    .unwrap();
    renderer.upload_geometry(&geometry).unwrap();
    renderer.discard_geometry("tri");

    assert_eq!(probe.uploaded(), vec!["tri".to_string()]);
    assert_eq!(probe.discarded(), vec!["tri".to_string()]);
}

#[test]
fn test_dispose_is_counted() {
    let mut renderer = MockRenderer::new();
    let probe = renderer.probe();

    renderer.dispose();
    assert_eq!(probe.dispose_count(), 1);
}

// ============================================================================
// Stats accumulation
// ============================================================================

#[test]
fn test_stats_accumulate_without_auto_reset() {
    let mut renderer = MockRenderer::sized(800, 600);
    renderer.set_stats_auto_reset(false);

    let mut scene = Scene::new(Color::BLACK);
    scene.insert_item(SceneItem::new("a")).unwrap();
    scene.insert_item(SceneItem::new("b")).unwrap();
    let camera = PerspectiveCamera::new();

    renderer.render(&scene, &camera).unwrap();
    renderer.render(&scene, &camera).unwrap();

    let stats = renderer.stats();
    assert_eq!(stats.frames, 2);
    assert_eq!(stats.draw_calls, 4);

    renderer.reset_stats();
    assert_eq!(renderer.stats().frames, 0);
}

#[test]
fn test_stats_reset_each_frame_with_auto_reset() {
    let mut renderer = MockRenderer::sized(800, 600);

    let mut scene = Scene::new(Color::BLACK);
    scene.insert_item(SceneItem::new("a")).unwrap();
    let camera = PerspectiveCamera::new();

    renderer.render(&scene, &camera).unwrap();
    renderer.render(&scene, &camera).unwrap();

    assert_eq!(renderer.stats().frames, 1);
}

// ============================================================================
// Factories
// ============================================================================

#[test]
fn test_factory_records_creation() {
    let (factory, probe) = MockRenderer::factory();

    let renderer = factory
        .create_renderer(&surface(640, 480), &ContextOptions::default())
        .unwrap();

    assert_eq!(renderer.size(), (640, 480));
    assert_eq!(probe.created_count(), 1);
    assert_eq!(probe.context_options().len(), 1);
    assert_eq!(
        probe.context_options()[0].power_preference,
        PowerPreference::Default
    );
}

#[test]
fn test_failing_factory_returns_error() {
    let factory = MockRenderer::failing_factory("no adapter");
    let result = factory.create_renderer(&surface(640, 480), &ContextOptions::default());
    assert!(matches!(result, Err(Nova3dError::InitializationFailed(_))));
}

#[test]
fn test_failing_render_factory_renders_err() {
    let (factory, probe) = MockRenderer::failing_render_factory();
    let mut renderer = factory
        .create_renderer(&surface(640, 480), &ContextOptions::default())
        .unwrap();

    let scene = Scene::new(Color::BLACK);
    let camera = PerspectiveCamera::new();
    assert!(renderer.render(&scene, &camera).is_err());
    assert_eq!(probe.render_count(), 0);
}
