/// Outline effect — post-process wrapper around the renderer's outline pass.
///
/// The client creates one alongside each renderer and routes frames
/// through it; the effect itself holds only the pass parameters and
/// delegates the actual drawing to the backend. It dies with its
/// renderer and is rebuilt on re-initialization.

use crate::camera::PerspectiveCamera;
use crate::error::Nova3dResult;
use crate::scene::{Color, Scene};
use super::renderer::Renderer;

/// Parameters of the outline pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineParams {
    /// Outline color
    pub color: Color,
    /// Outline thickness as a fraction of object size
    pub thickness: f32,
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            thickness: 0.003,
        }
    }
}

/// Frame post-process that draws outlined items over the base render.
pub struct OutlineEffect {
    params: OutlineParams,
}

impl OutlineEffect {
    /// Create an effect with default parameters.
    pub fn new() -> Self {
        Self {
            params: OutlineParams::default(),
        }
    }

    /// Create an effect with explicit parameters.
    pub fn with_params(params: OutlineParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &OutlineParams {
        &self.params
    }

    /// Render one frame through the outline pass.
    pub fn render(
        &self,
        renderer: &mut dyn Renderer,
        scene: &Scene,
        camera: &PerspectiveCamera,
    ) -> Nova3dResult<()> {
        renderer.render_outlined(scene, camera, &self.params)
    }
}

#[cfg(test)]
#[path = "outline_effect_tests.rs"]
mod tests;
