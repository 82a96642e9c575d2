use super::*;
use crate::camera::PerspectiveCamera;
use crate::renderer::mock_renderer::MockRenderer;
use crate::scene::Scene;

// ============================================================================
// Parameters
// ============================================================================

#[test]
fn test_default_params() {
    let effect = OutlineEffect::new();
    assert_eq!(effect.params().color, Color::BLACK);
    assert!((effect.params().thickness - 0.003).abs() < 1e-9);
}

#[test]
fn test_with_params() {
    let params = OutlineParams {
        color: Color::from_hex(0xFF8800),
        thickness: 0.01,
    };
    let effect = OutlineEffect::with_params(params);
    assert_eq!(*effect.params(), params);
}

// ============================================================================
// Delegation
// ============================================================================

#[test]
fn test_render_delegates_to_outline_pass() {
    let mut renderer = MockRenderer::sized(800, 600);
    let probe = renderer.probe();
    let effect = OutlineEffect::new();
    let scene = Scene::new(Color::BLACK);
    let camera = PerspectiveCamera::new();

    effect.render(&mut renderer, &scene, &camera).unwrap();

    assert_eq!(probe.outlined_render_count(), 1);
    assert_eq!(probe.render_count(), 0);
}
