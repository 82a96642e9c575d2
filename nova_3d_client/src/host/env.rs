/// Host environment traits — the canvas / document / window chain.
///
/// The client never talks to a concrete windowing system. It resolves its
/// environment through these traits at construction time: a canvas knows its
/// owning document, a document knows its window view, and the window supplies
/// viewport size plus optional frame-scheduling and clock capabilities.
/// Every link in the chain is optional so broken environments fail fast.

use std::sync::Arc;
use raw_window_handle::{RawDisplayHandle, RawWindowHandle};

/// Frame-scheduling closure provided by the host window.
///
/// Calling it asks the host for one more animation frame
/// (requestAnimationFrame on a browser host, request_redraw on winit).
pub type FrameRequestFn = Box<dyn Fn() + Send + Sync>;

/// Monotonic millisecond clock provided by the host window.
///
/// The reference epoch is host-defined; only differences are meaningful.
pub type ClockFn = Box<dyn Fn() -> f64 + Send + Sync>;

/// Transient surface descriptor handed to renderer factories.
///
/// Built on demand from the canvas; not stored by the client. The raw
/// handles are present on desktop hosts and absent on headless ones.
pub struct CanvasSurface {
    /// Current surface width in pixels
    pub width: u32,
    /// Current surface height in pixels
    pub height: u32,
    /// Display handle for backends that need one (desktop hosts only)
    pub display_handle: Option<RawDisplayHandle>,
    /// Window handle for backends that need one (desktop hosts only)
    pub window_handle: Option<RawWindowHandle>,
}

/// The drawing surface the client renders into.
pub trait HostCanvas: Send + Sync {
    /// The document owning this canvas, if any.
    ///
    /// Returns None for detached canvases; the client treats that as a
    /// fatal construction error.
    fn owner_document(&self) -> Option<Arc<dyn HostDocument>>;

    /// Build a surface descriptor for renderer creation.
    fn surface(&self) -> CanvasSurface;
}

/// The document owning a canvas.
pub trait HostDocument: Send + Sync {
    /// The window presenting this document, if any.
    ///
    /// Returns None for windowless documents; the client treats that as a
    /// fatal construction error.
    fn default_view(&self) -> Option<Arc<dyn HostWindow>>;
}

/// The window a document is presented in.
pub trait HostWindow: Send + Sync {
    /// Current viewport size in pixels (width, height).
    ///
    /// May legitimately report zero during minimization; resize logic
    /// guards against it.
    fn viewport_size(&self) -> (u32, u32);

    /// Frame-scheduling closure, if the host supports one.
    ///
    /// None degrades frame scheduling silently; it is never an error.
    fn frame_request_fn(&self) -> Option<FrameRequestFn>;

    /// Monotonic millisecond clock, if the host supports one.
    ///
    /// None degrades FPS measurement silently; it is never an error.
    fn clock_fn(&self) -> Option<ClockFn>;
}
