/// Nova3D demo binary.
///
/// Opens a winit window, adapts it into the client's host chain, and drives
/// a `RenderClient` through the resize/update/render loop against a backend
/// that accepts every call and draws nothing. Useful for exercising the
/// client on machines without a GPU backend crate.
///
/// Run with: `RUST_LOG=debug cargo run -p nova3d_demo`

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use nova_3d_client::glam::{Mat4, Vec3};
use nova_3d_client::nova3d::camera::PerspectiveCamera;
use nova_3d_client::nova3d::host::{CanvasSurface, WinitCanvas};
use nova_3d_client::nova3d::render::{ContextOptions, OutlineParams, RenderStats, ShadowConfig};
use nova_3d_client::nova3d::resource::{GeometryDef, ItemDef, RigDef};
use nova_3d_client::nova3d::scene::{Scene, FLAG_CAST_SHADOW, FLAG_OUTLINED, FLAG_VISIBLE};
use nova_3d_client::nova3d::{
    ClientConfig, Nova3dResult, RenderClient, Renderer, RendererFactory,
};

/// Frames between progress reports on the console.
const REPORT_INTERVAL_FRAMES: u64 = 120;

// ============================================================================
// Null backend
// ============================================================================

/// Backend stand-in that tracks state but never touches a GPU.
struct NullRenderer {
    size: (u32, u32),
    shadow: ShadowConfig,
    auto_reset: bool,
    stats: RenderStats,
    uploads: Vec<String>,
}

impl NullRenderer {
    fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            shadow: ShadowConfig::default(),
            auto_reset: true,
            stats: RenderStats::default(),
            uploads: Vec::new(),
        }
    }

    fn frame_rendered(&mut self, scene: &Scene) {
        if self.auto_reset {
            self.stats = RenderStats::default();
        }
        self.stats.frames += 1;
        self.stats.draw_calls += scene
            .items()
            .filter(|(_, item)| item.has_flag(FLAG_VISIBLE))
            .count() as u32;
    }
}

impl Renderer for NullRenderer {
    fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        log::debug!("backend buffer resized to {width}x{height}");
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn set_shadow_config(&mut self, config: ShadowConfig) {
        self.shadow = config;
    }

    fn shadow_config(&self) -> ShadowConfig {
        self.shadow
    }

    fn set_stats_auto_reset(&mut self, auto_reset: bool) {
        self.auto_reset = auto_reset;
    }

    fn stats(&self) -> RenderStats {
        self.stats
    }

    fn reset_stats(&mut self) {
        self.stats = RenderStats::default();
    }

    fn upload_geometry(&mut self, geometry: &GeometryDef) -> Nova3dResult<()> {
        log::info!(
            "uploading '{}' ({} vertices, {} triangles)",
            geometry.name(),
            geometry.vertex_count(),
            geometry.triangle_count(),
        );
        self.uploads.push(geometry.name().to_string());
        Ok(())
    }

    fn discard_geometry(&mut self, name: &str) {
        self.uploads.retain(|uploaded| uploaded != name);
        log::info!("discarded '{name}'");
    }

    fn render(&mut self, scene: &Scene, _camera: &PerspectiveCamera) -> Nova3dResult<()> {
        self.frame_rendered(scene);
        Ok(())
    }

    fn render_outlined(
        &mut self,
        scene: &Scene,
        _camera: &PerspectiveCamera,
        _params: &OutlineParams,
    ) -> Nova3dResult<()> {
        self.frame_rendered(scene);
        Ok(())
    }

    fn dispose(&mut self) {
        self.uploads.clear();
        log::info!("backend disposed");
    }
}

fn null_backend_factory() -> Box<dyn RendererFactory> {
    Box::new(
        |surface: &CanvasSurface, options: &ContextOptions| -> Nova3dResult<Box<dyn Renderer>> {
            log::debug!(
                "creating null backend ({}x{}, alpha {}, antialias {}, power '{}')",
                surface.width,
                surface.height,
                options.alpha,
                options.antialias,
                options.power_preference,
            );
            Ok(Box::new(NullRenderer::new(surface.width, surface.height)))
        },
    )
}

// ============================================================================
// Demo world
// ============================================================================

/// Populate the client collections with a floor and a spinning hero cube.
///
/// The injectors pick these rows up on the next `update` and turn them
/// into backend uploads and scene items.
fn seed_world(client: &mut RenderClient) -> Nova3dResult<()> {
    let floor = GeometryDef::new(
        "floor_mesh",
        vec![
            Vec3::new(-1000.0, 0.0, -1000.0),
            Vec3::new(1000.0, 0.0, -1000.0),
            Vec3::new(1000.0, 0.0, 1000.0),
            Vec3::new(-1000.0, 0.0, 1000.0),
        ],
        vec![0, 1, 2, 0, 2, 3],
    )?;

    // 80-unit cube centered on the origin.
    let half = 40.0;
    let hero = GeometryDef::new(
        "hero_mesh",
        vec![
            Vec3::new(-half, -half, -half),
            Vec3::new(half, -half, -half),
            Vec3::new(half, half, -half),
            Vec3::new(-half, half, -half),
            Vec3::new(-half, -half, half),
            Vec3::new(half, -half, half),
            Vec3::new(half, half, half),
            Vec3::new(-half, half, half),
        ],
        vec![
            0, 1, 2, 0, 2, 3, // back
            5, 4, 7, 5, 7, 6, // front
            4, 0, 3, 4, 3, 7, // left
            1, 5, 6, 1, 6, 2, // right
            3, 2, 6, 3, 6, 7, // top
            4, 5, 1, 4, 1, 0, // bottom
        ],
    )?;

    client.geometries_mut().insert(floor)?;
    client.geometries_mut().insert(hero)?;

    client
        .items_mut()
        .insert(ItemDef::new("floor").with_geometry("floor_mesh"))?;
    client.items_mut().insert(
        ItemDef::new("hero")
            .with_geometry("hero_mesh")
            .with_transform(Mat4::from_translation(Vec3::new(0.0, half, 0.0)))
            .with_flags(FLAG_VISIBLE | FLAG_CAST_SHADOW | FLAG_OUTLINED),
    )?;

    client.rigs_mut().insert(RigDef::new("walk", "hero", 32))?;

    Ok(())
}

// ============================================================================
// Application
// ============================================================================

struct DemoApp {
    client: Option<RenderClient>,
    epoch: Instant,
    frame: u64,
}

impl DemoApp {
    fn new() -> Self {
        Self {
            client: None,
            epoch: Instant::now(),
            frame: 0,
        }
    }

    /// Milliseconds since the demo started, the timeline the client's
    /// debounce runs on.
    fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.client.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Nova3D demo")
            .with_inner_size(LogicalSize::new(1280.0, 720.0));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(error) => {
                log::error!("failed to create window: {error}");
                event_loop.exit();
                return;
            }
        };

        let canvas = WinitCanvas::new(window);
        let config = ClientConfig {
            shadows: true,
            ..ClientConfig::default()
        };

        let mut client = match RenderClient::new(canvas, null_backend_factory(), config) {
            Ok(client) => client,
            Err(error) => {
                log::error!("failed to create render client: {error}");
                event_loop.exit();
                return;
            }
        };

        if let Err(error) = seed_world(&mut client) {
            log::warn!("demo world is incomplete: {error}");
        }

        client.set_rendering(true);
        client.request_frame();
        self.client = Some(client);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(client) = &mut self.client {
                    client.dispose();
                }
                event_loop.exit();
            }

            WindowEvent::Resized(_) => {
                let now = self.now_ms();
                if let Some(client) = &mut self.client {
                    client.notify_resize(now);
                }
            }

            WindowEvent::RedrawRequested => {
                let now = self.now_ms();
                let Some(client) = &mut self.client else {
                    return;
                };

                client.update(now);

                // Spin the hero once the item injector has materialized it.
                let angle = (now / 1000.0) as f32 * 0.8;
                let spin = Mat4::from_translation(Vec3::new(0.0, 40.0, 0.0))
                    * Mat4::from_rotation_y(angle);
                if let Some(key) = client.scene().item_key("hero") {
                    if let Some(hero) = client.scene_mut().item_mut(key) {
                        hero.set_transform(spin);
                    }
                }

                client.render_frame();
                self.frame += 1;

                if self.frame % REPORT_INTERVAL_FRAMES == 0 {
                    if let Some(stats) = client.render_stats() {
                        match client.core().fps().fps() {
                            Some(fps) => log::info!(
                                "{} frames rendered, {} draw calls, {fps:.1} fps",
                                stats.frames,
                                stats.draw_calls,
                            ),
                            None => log::info!(
                                "{} frames rendered, {} draw calls",
                                stats.frames,
                                stats.draw_calls,
                            ),
                        }
                    }
                }

                client.request_frame();
            }

            _ => {}
        }
    }
}

// ============================================================================
// Entry point
// ============================================================================

/// Install `env_logger` for the demo's own messages.
///
/// `RUST_LOG` overrides the default info level; client-internal messages
/// arrive through the library's own console logger.
fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}

fn main() -> Result<(), winit::error::EventLoopError> {
    init_logging();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DemoApp::new();
    event_loop.run_app(&mut app)
}
