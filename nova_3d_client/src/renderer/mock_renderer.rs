/// Mock Renderer for unit tests (no GPU required)
///
/// This mock renderer allows testing the client lifecycle, resize flow,
/// and injector dispatch without a real GPU or graphics backend. A
/// MockProbe shares the recording journals so tests can assert on them
/// after the renderer has been moved into the client.

#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use crate::error::{Nova3dError, Nova3dResult};
#[cfg(test)]
use crate::camera::PerspectiveCamera;
#[cfg(test)]
use crate::host::CanvasSurface;
#[cfg(test)]
use crate::resource::GeometryDef;
#[cfg(test)]
use crate::scene::Scene;
#[cfg(test)]
use super::outline_effect::OutlineParams;
#[cfg(test)]
use super::renderer::{
    ContextOptions, Renderer, RendererFactory, RenderStats, ShadowConfig,
};

// ============================================================================
// Probe
// ============================================================================

/// Shared journals recording everything a MockRenderer was asked to do.
///
/// Cloning a probe clones the handles, not the journals; all clones see
/// the same recordings.
#[cfg(test)]
#[derive(Clone)]
pub struct MockProbe {
    created_count: Arc<Mutex<usize>>,
    context_options: Arc<Mutex<Vec<ContextOptions>>>,
    set_size_calls: Arc<Mutex<Vec<(u32, u32)>>>,
    shadow_configs: Arc<Mutex<Vec<ShadowConfig>>>,
    auto_reset_calls: Arc<Mutex<Vec<bool>>>,
    render_count: Arc<Mutex<usize>>,
    outlined_render_count: Arc<Mutex<usize>>,
    dispose_count: Arc<Mutex<usize>>,
    uploaded: Arc<Mutex<Vec<String>>>,
    discarded: Arc<Mutex<Vec<String>>>,
}

#[cfg(test)]
impl MockProbe {
    pub fn new() -> Self {
        Self {
            created_count: Arc::new(Mutex::new(0)),
            context_options: Arc::new(Mutex::new(Vec::new())),
            set_size_calls: Arc::new(Mutex::new(Vec::new())),
            shadow_configs: Arc::new(Mutex::new(Vec::new())),
            auto_reset_calls: Arc::new(Mutex::new(Vec::new())),
            render_count: Arc::new(Mutex::new(0)),
            outlined_render_count: Arc::new(Mutex::new(0)),
            dispose_count: Arc::new(Mutex::new(0)),
            uploaded: Arc::new(Mutex::new(Vec::new())),
            discarded: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of renderers the factory created
    pub fn created_count(&self) -> usize {
        *self.created_count.lock().unwrap()
    }

    /// Context options passed to the factory, in creation order
    pub fn context_options(&self) -> Vec<ContextOptions> {
        self.context_options.lock().unwrap().clone()
    }

    /// Every set_size call, in order
    pub fn set_size_calls(&self) -> Vec<(u32, u32)> {
        self.set_size_calls.lock().unwrap().clone()
    }

    /// Every shadow config applied, in order
    pub fn shadow_configs(&self) -> Vec<ShadowConfig> {
        self.shadow_configs.lock().unwrap().clone()
    }

    /// Every stats auto-reset setting applied, in order
    pub fn auto_reset_calls(&self) -> Vec<bool> {
        self.auto_reset_calls.lock().unwrap().clone()
    }

    /// Number of direct render calls
    pub fn render_count(&self) -> usize {
        *self.render_count.lock().unwrap()
    }

    /// Number of outlined render calls
    pub fn outlined_render_count(&self) -> usize {
        *self.outlined_render_count.lock().unwrap()
    }

    /// Total frames drawn through either path
    pub fn draw_count(&self) -> usize {
        self.render_count() + self.outlined_render_count()
    }

    /// Number of dispose calls across all renderers sharing this probe
    pub fn dispose_count(&self) -> usize {
        *self.dispose_count.lock().unwrap()
    }

    /// Names of uploaded geometries, in order
    pub fn uploaded(&self) -> Vec<String> {
        self.uploaded.lock().unwrap().clone()
    }

    /// Names of discarded geometries, in order
    pub fn discarded(&self) -> Vec<String> {
        self.discarded.lock().unwrap().clone()
    }
}

// ============================================================================
// Mock Renderer
// ============================================================================

/// Mock Renderer that records calls without GPU work
#[cfg(test)]
pub struct MockRenderer {
    size: (u32, u32),
    shadow: ShadowConfig,
    auto_reset: bool,
    stats: RenderStats,
    fail_render: bool,
    fail_upload: bool,
    probe: MockProbe,
}

#[cfg(test)]
impl MockRenderer {
    /// Create a zero-sized mock renderer
    pub fn new() -> Self {
        Self::sized(0, 0)
    }

    /// Create a mock renderer with an initial buffer size
    pub fn sized(width: u32, height: u32) -> Self {
        Self::with_probe(width, height, MockProbe::new())
    }

    /// Create a mock renderer recording into an existing probe
    pub fn with_probe(width: u32, height: u32, probe: MockProbe) -> Self {
        Self {
            size: (width, height),
            shadow: ShadowConfig::default(),
            auto_reset: true,
            stats: RenderStats::default(),
            fail_render: false,
            fail_upload: false,
            probe,
        }
    }

    /// Make every render call fail with a backend error
    pub fn failing_render(mut self) -> Self {
        self.fail_render = true;
        self
    }

    /// Make every geometry upload fail with a backend error
    pub fn failing_upload(mut self) -> Self {
        self.fail_upload = true;
        self
    }

    /// Get a probe sharing this renderer's journals
    pub fn probe(&self) -> MockProbe {
        self.probe.clone()
    }

    /// Factory producing mock renderers that all record into the
    /// returned probe
    pub fn factory() -> (Box<dyn RendererFactory>, MockProbe) {
        let probe = MockProbe::new();
        let shared = probe.clone();
        let factory = move |surface: &CanvasSurface,
                            options: &ContextOptions|
              -> Nova3dResult<Box<dyn Renderer>> {
            *shared.created_count.lock().unwrap() += 1;
            shared.context_options.lock().unwrap().push(*options);
            Ok(Box::new(MockRenderer::with_probe(
                surface.width,
                surface.height,
                shared.clone(),
            )))
        };
        (Box::new(factory), probe)
    }

    /// Factory whose renderers fail every render call
    pub fn failing_render_factory() -> (Box<dyn RendererFactory>, MockProbe) {
        let probe = MockProbe::new();
        let shared = probe.clone();
        let factory = move |surface: &CanvasSurface,
                            options: &ContextOptions|
              -> Nova3dResult<Box<dyn Renderer>> {
            *shared.created_count.lock().unwrap() += 1;
            shared.context_options.lock().unwrap().push(*options);
            Ok(Box::new(
                MockRenderer::with_probe(surface.width, surface.height, shared.clone())
                    .failing_render(),
            ))
        };
        (Box::new(factory), probe)
    }

    /// Factory that always refuses to create a renderer
    pub fn failing_factory(message: &'static str) -> Box<dyn RendererFactory> {
        Box::new(
            move |_surface: &CanvasSurface,
                  _options: &ContextOptions|
                  -> Nova3dResult<Box<dyn Renderer>> {
                Err(Nova3dError::InitializationFailed(message.to_string()))
            },
        )
    }
}

#[cfg(test)]
impl Renderer for MockRenderer {
    fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.probe.set_size_calls.lock().unwrap().push((width, height));
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn set_shadow_config(&mut self, config: ShadowConfig) {
        self.shadow = config;
        self.probe.shadow_configs.lock().unwrap().push(config);
    }

    fn shadow_config(&self) -> ShadowConfig {
        self.shadow
    }

    fn set_stats_auto_reset(&mut self, auto_reset: bool) {
        self.auto_reset = auto_reset;
        self.probe.auto_reset_calls.lock().unwrap().push(auto_reset);
    }

    fn stats(&self) -> RenderStats {
        self.stats
    }

    fn reset_stats(&mut self) {
        self.stats = RenderStats::default();
    }

    fn upload_geometry(&mut self, geometry: &GeometryDef) -> Nova3dResult<()> {
        if self.fail_upload {
            return Err(Nova3dError::BackendError(
                "simulated upload failure".to_string(),
            ));
        }
        self.probe
            .uploaded
            .lock()
            .unwrap()
            .push(geometry.name().to_string());
        Ok(())
    }

    fn discard_geometry(&mut self, name: &str) {
        self.probe.discarded.lock().unwrap().push(name.to_string());
    }

    fn render(&mut self, scene: &Scene, _camera: &PerspectiveCamera) -> Nova3dResult<()> {
        if self.fail_render {
            return Err(Nova3dError::BackendError(
                "simulated render failure".to_string(),
            ));
        }
        if self.auto_reset {
            self.stats = RenderStats::default();
        }
        self.stats.frames += 1;
        self.stats.draw_calls += scene.item_count() as u32;
        *self.probe.render_count.lock().unwrap() += 1;
        Ok(())
    }

    fn render_outlined(
        &mut self,
        scene: &Scene,
        _camera: &PerspectiveCamera,
        _params: &OutlineParams,
    ) -> Nova3dResult<()> {
        if self.fail_render {
            return Err(Nova3dError::BackendError(
                "simulated render failure".to_string(),
            ));
        }
        if self.auto_reset {
            self.stats = RenderStats::default();
        }
        self.stats.frames += 1;
        self.stats.draw_calls += scene.item_count() as u32;
        *self.probe.outlined_render_count.lock().unwrap() += 1;
        Ok(())
    }

    fn dispose(&mut self) {
        *self.probe.dispose_count.lock().unwrap() += 1;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_renderer_tests.rs"]
mod tests;
