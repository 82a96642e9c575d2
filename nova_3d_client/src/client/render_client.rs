/// Render client — the rendering shell around a client core.
///
/// Composes a ClientCore with everything rendering needs: the host
/// canvas/window adapters, the renderer and its outline effect, the
/// perspective camera, the scene root, and debounced resize handling.
/// The embedding event loop drives it through three hooks: resize
/// notifications (`notify_resize`), a per-frame tick (`update`), and
/// the frame render (`render_frame`).

use std::sync::Arc;
use crate::camera::PerspectiveCamera;
use crate::collection::Collection;
use crate::error::{Nova3dError, Nova3dResult};
use crate::host::{FrameRequestFn, HostCanvas, HostWindow};
use crate::injector::{GeometryInjector, InjectorCtx, ItemInjector, RigInjector};
use crate::renderer::{
    OutlineEffect, Renderer, RendererFactory, RenderStats, ShadowConfig, ShadowMapType,
};
use crate::resource::{GeometryDef, GeometryKey, ItemDef, ItemKey, RigDef, RigKey};
use crate::scene::{Color, Scene};
use crate::{client_error, client_info, client_warn};
use super::client_core::ClientCore;
use super::config::ClientConfig;
use super::resize::ResizeDebounce;

/// A game client bound to a rendering backend.
///
/// Owns exactly one renderer at a time (possibly none while degraded),
/// one camera, and one scene. All entry points are safe to call after
/// `dispose()`; they simply do nothing.
pub struct RenderClient {
    /// The composed game-client core
    core: ClientCore,
    /// Drawing surface handed in at construction
    canvas: Arc<dyn HostCanvas>,
    /// Window view resolved through the canvas's owning document
    window: Arc<dyn HostWindow>,
    /// Factory invoked on every renderer (re)initialization
    factory: Box<dyn RendererFactory>,
    /// Live renderer; None before creation, after failure, after dispose
    renderer: Option<Box<dyn Renderer>>,
    /// Outline post-process; lives and dies with the renderer
    effect: Option<OutlineEffect>,
    /// The single point of view
    camera: PerspectiveCamera,
    /// Render-graph root
    scene: Scene,
    /// Debounced resize state machine
    resize_debounce: ResizeDebounce,
    /// Host frame scheduler captured for the external render loop
    next_frame_fn: Option<FrameRequestFn>,
    /// Loop flag consumed by the external scheduler
    rendering: bool,
    /// Set once by dispose(); gates every entry point
    disposed: bool,
}

impl RenderClient {
    /// Create a render client over a host canvas.
    ///
    /// Resolves the canvas → document → window chain, captures the
    /// optional frame scheduler and clock, wires the collections and
    /// their injectors, creates the renderer, and runs one
    /// unconditional resize to establish the initial size. Renderer
    /// creation failure is NOT fatal here: the client comes up degraded
    /// and a later `initialize_renderer()` may still succeed.
    ///
    /// # Arguments
    ///
    /// * `canvas` - Drawing surface attached to a live host chain
    /// * `factory` - Backend factory used for renderer (re)creation
    /// * `config` - Client configuration
    ///
    /// # Errors
    ///
    /// Returns `Nova3dError::MissingDocument` for a detached canvas and
    /// `Nova3dError::MissingWindow` for a windowless document. Both
    /// indicate an integration error, not a runtime condition.
    pub fn new(
        canvas: Arc<dyn HostCanvas>,
        factory: Box<dyn RendererFactory>,
        config: ClientConfig,
    ) -> Nova3dResult<Self> {
        let Some(document) = canvas.owner_document() else {
            client_error!("nova3d::RenderClient", "Canvas has no owning document");
            return Err(Nova3dError::MissingDocument);
        };
        let Some(window) = document.default_view() else {
            client_error!("nova3d::RenderClient", "Document has no window view");
            return Err(Nova3dError::MissingWindow);
        };

        // Optional host capabilities; absence degrades features silently
        let next_frame_fn = window.frame_request_fn();
        let clock = window.clock_fn();

        let mut client = Self {
            core: ClientCore::new(config, clock),
            canvas,
            window,
            factory,
            renderer: None,
            effect: None,
            camera: PerspectiveCamera::new(),
            scene: Scene::new(Color::from_hex(config.background)),
            resize_debounce: ResizeDebounce::new(),
            next_frame_fn,
            rendering: false,
            disposed: false,
        };

        client.initialize_collections();
        client.initialize_renderer();
        // Establish the initial size; later resizes go through the debounce
        client.resize();

        Ok(client)
    }

    /// Wire the collections: reset them through the core, then attach
    /// the three injection strategies.
    fn initialize_collections(&mut self) {
        self.core.initialize_collections();
        self.core
            .geometries_mut()
            .set_injector(Box::new(GeometryInjector::new()));
        self.core
            .items_mut()
            .set_injector(Box::new(ItemInjector::new()));
        self.core
            .rigs_mut()
            .set_injector(Box::new(RigInjector::new()));
    }

    /// Create the renderer, disposing any prior one first.
    ///
    /// Must be called again after changing context-affecting options.
    /// There is never more than one live renderer: the previous
    /// instance is disposed exactly once before the factory runs. On
    /// factory failure the client logs a warning and returns false; it
    /// stays alive without a renderer and frames become no-ops until a
    /// later call succeeds.
    pub fn initialize_renderer(&mut self) -> bool {
        if let Some(mut old) = self.renderer.take() {
            old.dispose();
            self.effect = None;
        }

        let surface = self.canvas.surface();
        let options = self.core.config().context;
        match self.factory.create_renderer(&surface, &options) {
            Ok(mut renderer) => {
                // Callers own the stats reset policy, not the backend
                renderer.set_stats_auto_reset(false);
                renderer.set_shadow_config(ShadowConfig {
                    enabled: self.core.config().shadows,
                    map_type: ShadowMapType::PcfSoft,
                });
                self.renderer = Some(renderer);
                self.effect = Some(OutlineEffect::new());
                client_info!(
                    "nova3d::RenderClient",
                    "Renderer created ({}x{}, power preference '{}')",
                    surface.width,
                    surface.height,
                    options.power_preference
                );
                true
            }
            Err(error) => {
                client_warn!(
                    "nova3d::RenderClient",
                    "Renderer creation failed: {}",
                    error
                );
                false
            }
        }
    }

    /// Resize the draw buffer and camera to the current viewport.
    ///
    /// Runs immediately; the debounce applies only to `notify_resize`
    /// events. A zero-sized viewport (hidden or minimized window)
    /// aborts without touching the renderer size or camera aspect.
    pub fn resize(&mut self) {
        if self.disposed {
            return;
        }
        let (width, height) = self.window.viewport_size();
        if width == 0 || height == 0 {
            return;
        }
        if let Some(renderer) = self.renderer.as_deref_mut() {
            renderer.set_size(width, height);
        }
        // Aspect tracks the viewport even while running without a renderer
        self.camera.set_aspect(width as f32 / height as f32);
        self.camera.update_projection_matrix();
    }

    /// Record a resize event from the host at the given time.
    ///
    /// Events are debounced: the first opens a 100ms settling window,
    /// the rest of the burst is dropped. The actual resize runs from
    /// `update` once the window settles. Ignored after disposal.
    pub fn notify_resize(&mut self, now: f64) {
        if self.disposed {
            return;
        }
        self.resize_debounce.notify(now);
    }

    /// Per-frame housekeeping at the given time.
    ///
    /// Fires the pending debounced resize when due, dispatches deferred
    /// collection events into the injectors, and ticks the FPS counter.
    /// Ignored after disposal, so a deadline armed before dispose can
    /// never reach a disposed renderer.
    pub fn update(&mut self, now: f64) {
        if self.disposed {
            return;
        }
        if self.resize_debounce.poll(now) {
            self.resize();
        }
        let mut ctx = InjectorCtx {
            renderer: self.renderer.as_deref_mut(),
            scene: &mut self.scene,
        };
        self.core.dispatch_collection_events(&mut ctx);
        self.core.fps_mut().tick();
    }

    /// Render one frame.
    ///
    /// Routes through the outline effect when one is present, straight
    /// through the renderer otherwise. A degraded client (no renderer)
    /// and a disposed client draw nothing. Backend render failures are
    /// logged and swallowed; the render loop must never unwind.
    pub fn render_frame(&mut self) {
        if self.disposed {
            return;
        }
        let Some(renderer) = self.renderer.as_deref_mut() else {
            return;
        };
        let result = match &self.effect {
            Some(effect) => effect.render(renderer, &self.scene, &self.camera),
            None => renderer.render(&self.scene, &self.camera),
        };
        if let Err(error) = result {
            client_warn!("nova3d::RenderClient", "Frame render failed: {}", error);
        }
    }

    /// Tear the client down.
    ///
    /// Stops the external scheduler via the rendering flag, deactivates
    /// resize handling, disposes the renderer (exactly once, enforced
    /// by taking it out of its slot), drops the effect, then delegates
    /// to the core. Calling dispose again is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.rendering = false;
        self.disposed = true;
        if let Some(mut renderer) = self.renderer.take() {
            renderer.dispose();
        }
        self.effect = None;
        self.core.dispose();
        client_info!("nova3d::RenderClient", "Client disposed");
    }

    // ===== SCHEDULER SURFACE =====

    /// Host frame scheduler captured at construction, if the host has
    /// one. A schedulerless host exposes None and the external loop
    /// must pace itself.
    pub fn next_frame_fn(&self) -> Option<&FrameRequestFn> {
        self.next_frame_fn.as_ref()
    }

    /// Ask the host for one more animation frame.
    ///
    /// Returns false on hosts without a frame scheduler.
    pub fn request_frame(&self) -> bool {
        match &self.next_frame_fn {
            Some(request) => {
                request();
                true
            }
            None => false,
        }
    }

    /// True while the external scheduler should keep its loop running.
    pub fn is_rendering(&self) -> bool {
        self.rendering
    }

    /// Flip the scheduler flag. Disposal forces it off for good.
    pub fn set_rendering(&mut self, rendering: bool) {
        if !self.disposed {
            self.rendering = rendering;
        }
    }

    // ===== STATE ACCESSORS =====

    /// True once `dispose()` has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// True while a live renderer is attached.
    ///
    /// Check this before assuming render capability; renderer creation
    /// may have failed.
    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    /// Accumulated renderer statistics, or None without a renderer.
    ///
    /// Automatic per-frame reset is disabled at initialization, so the
    /// counters grow until `reset_render_stats` is called. The client
    /// itself never resets them; that policy belongs to the embedder.
    pub fn render_stats(&self) -> Option<RenderStats> {
        self.renderer.as_ref().map(|renderer| renderer.stats())
    }

    /// Reset accumulated renderer statistics to zero.
    pub fn reset_render_stats(&mut self) {
        if let Some(renderer) = self.renderer.as_deref_mut() {
            renderer.reset_stats();
        }
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn core(&self) -> &ClientCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut ClientCore {
        &mut self.core
    }

    pub fn config(&self) -> &ClientConfig {
        self.core.config()
    }

    // ===== COLLECTION ACCESS =====

    pub fn geometries(&self) -> &Collection<GeometryKey, GeometryDef> {
        self.core.geometries()
    }

    pub fn geometries_mut(&mut self) -> &mut Collection<GeometryKey, GeometryDef> {
        self.core.geometries_mut()
    }

    pub fn items(&self) -> &Collection<ItemKey, ItemDef> {
        self.core.items()
    }

    pub fn items_mut(&mut self) -> &mut Collection<ItemKey, ItemDef> {
        self.core.items_mut()
    }

    pub fn rigs(&self) -> &Collection<RigKey, RigDef> {
        self.core.rigs()
    }

    pub fn rigs_mut(&mut self) -> &mut Collection<RigKey, RigDef> {
        self.core.rigs_mut()
    }
}

#[cfg(test)]
#[path = "render_client_tests.rs"]
mod tests;
