/// Renderer trait - the backend seam the client composes against.
///
/// Implemented by rendering backends (WebGL, Vulkan, a test recorder).
/// The client never knows which backend it drives; it configures one
/// through a RendererFactory at construction and re-creation.

use std::fmt;
use crate::camera::PerspectiveCamera;
use crate::error::Nova3dResult;
use crate::host::CanvasSurface;
use crate::resource::GeometryDef;
use crate::scene::Scene;
use super::outline_effect::OutlineParams;

// ============================================================================
// Context options
// ============================================================================

/// GPU power preference requested at context creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerPreference {
    /// Let the host pick
    Default,
    /// Prefer the discrete/high-performance adapter
    HighPerformance,
    /// Prefer the integrated/low-power adapter
    LowPower,
}

impl PowerPreference {
    /// Wire spelling of this preference.
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerPreference::Default => "default",
            PowerPreference::HighPerformance => "high-performance",
            PowerPreference::LowPower => "low-power",
        }
    }

    /// Parse a wire spelling.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "default" => Some(PowerPreference::Default),
            "high-performance" => Some(PowerPreference::HighPerformance),
            "low-power" => Some(PowerPreference::LowPower),
            _ => None,
        }
    }
}

impl Default for PowerPreference {
    fn default() -> Self {
        PowerPreference::Default
    }
}

impl fmt::Display for PowerPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rendering-context options, fixed at renderer creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextOptions {
    /// Request an alpha channel in the default framebuffer
    pub alpha: bool,
    /// Request multisample antialiasing
    pub antialias: bool,
    /// GPU power preference
    pub power_preference: PowerPreference,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            alpha: false,
            antialias: true,
            power_preference: PowerPreference::Default,
        }
    }
}

// ============================================================================
// Shadow configuration
// ============================================================================

/// Shadow-map filtering algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowMapType {
    /// Unfiltered depth comparison
    Basic,
    /// Percentage-closer filtering
    Pcf,
    /// Percentage-closer filtering with bilinear softening
    PcfSoft,
}

/// Shadow-mapping configuration applied by the client after renderer creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowConfig {
    /// Master switch for shadow mapping
    pub enabled: bool,
    /// Filtering algorithm when enabled
    pub map_type: ShadowMapType,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            map_type: ShadowMapType::Pcf,
        }
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Renderer statistics.
///
/// The client disables automatic per-frame reset, so counters accumulate
/// until an external caller invokes `reset_stats`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderStats {
    /// Number of frames rendered
    pub frames: u64,
    /// Number of draw calls
    pub draw_calls: u32,
    /// Number of triangles drawn
    pub triangles: u32,
}

// ============================================================================
// Renderer trait
// ============================================================================

/// Main renderer trait
///
/// The client drives exactly one live renderer at a time through this
/// interface. Backends own their GPU state and must tolerate `dispose`
/// followed by drop.
pub trait Renderer: Send + Sync {
    /// Resize the drawing buffer.
    ///
    /// # Arguments
    ///
    /// * `width` - New buffer width in pixels
    /// * `height` - New buffer height in pixels
    fn set_size(&mut self, width: u32, height: u32);

    /// Current drawing buffer size (width, height).
    fn size(&self) -> (u32, u32);

    /// Apply a shadow-mapping configuration.
    fn set_shadow_config(&mut self, config: ShadowConfig);

    /// Current shadow-mapping configuration.
    fn shadow_config(&self) -> ShadowConfig;

    /// Enable or disable automatic per-frame statistics reset.
    fn set_stats_auto_reset(&mut self, auto_reset: bool);

    /// Get statistics about the renderer.
    fn stats(&self) -> RenderStats;

    /// Reset accumulated statistics to zero.
    fn reset_stats(&mut self);

    /// Upload a geometry definition to GPU memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the data (out of memory,
    /// lost context, etc.)
    fn upload_geometry(&mut self, geometry: &GeometryDef) -> Nova3dResult<()>;

    /// Release the GPU resources of a previously uploaded geometry.
    ///
    /// Unknown names are ignored.
    fn discard_geometry(&mut self, name: &str);

    /// Render one frame of the scene from the camera's point of view.
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Nova3dResult<()>;

    /// Render one frame through the backend's outline pass.
    fn render_outlined(
        &mut self,
        scene: &Scene,
        camera: &PerspectiveCamera,
        params: &OutlineParams,
    ) -> Nova3dResult<()>;

    /// Release all GPU resources.
    ///
    /// The client calls this exactly once before dropping a renderer.
    fn dispose(&mut self);
}

// ============================================================================
// Renderer factory
// ============================================================================

/// Factory for constructing rendering backends.
///
/// The client is handed one at construction and calls it on every
/// renderer (re)initialization. Any closure with the matching signature
/// is a factory.
pub trait RendererFactory: Send + Sync {
    /// Create a renderer for the given surface with the given options.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be constructed (no
    /// adapter, context creation refused, etc.). The client converts
    /// this into a logged warning plus a `false` status.
    fn create_renderer(
        &self,
        surface: &CanvasSurface,
        options: &ContextOptions,
    ) -> Nova3dResult<Box<dyn Renderer>>;
}

impl<F> RendererFactory for F
where
    F: Fn(&CanvasSurface, &ContextOptions) -> Nova3dResult<Box<dyn Renderer>> + Send + Sync,
{
    fn create_renderer(
        &self,
        surface: &CanvasSurface,
        options: &ContextOptions,
    ) -> Nova3dResult<Box<dyn Renderer>> {
        self(surface, options)
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
