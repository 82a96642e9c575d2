/// Desktop host adapters over a winit window.
///
/// A winit window plays all three roles of the host chain: the canvas
/// surface it exposes, the document owning it, and the window view with
/// its viewport size, redraw scheduling, and monotonic clock. Each adapter
/// holds an Arc to the same underlying window.

use std::sync::Arc;
use std::time::Instant;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use winit::window::Window;
use super::env::{CanvasSurface, ClockFn, FrameRequestFn, HostCanvas, HostDocument, HostWindow};

/// Canvas role of a winit window.
pub struct WinitCanvas {
    window: Arc<Window>,
    epoch: Instant,
}

impl WinitCanvas {
    /// Wrap a winit window as the client's host canvas.
    ///
    /// The clock epoch is fixed here so every adapter derived from this
    /// canvas reports milliseconds on the same timeline.
    pub fn new(window: Arc<Window>) -> Arc<Self> {
        Arc::new(Self {
            window,
            epoch: Instant::now(),
        })
    }
}

impl HostCanvas for WinitCanvas {
    fn owner_document(&self) -> Option<Arc<dyn HostDocument>> {
        Some(Arc::new(WinitDocument {
            window: Arc::clone(&self.window),
            epoch: self.epoch,
        }))
    }

    fn surface(&self) -> CanvasSurface {
        let size = self.window.inner_size();
        CanvasSurface {
            width: size.width,
            height: size.height,
            display_handle: self
                .window
                .display_handle()
                .ok()
                .map(|handle| handle.as_raw()),
            window_handle: self
                .window
                .window_handle()
                .ok()
                .map(|handle| handle.as_raw()),
        }
    }
}

/// Document role of a winit window.
pub struct WinitDocument {
    window: Arc<Window>,
    epoch: Instant,
}

impl HostDocument for WinitDocument {
    fn default_view(&self) -> Option<Arc<dyn HostWindow>> {
        Some(Arc::new(WinitWindow {
            window: Arc::clone(&self.window),
            epoch: self.epoch,
        }))
    }
}

/// Window-view role of a winit window.
pub struct WinitWindow {
    window: Arc<Window>,
    epoch: Instant,
}

impl HostWindow for WinitWindow {
    fn viewport_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    fn frame_request_fn(&self) -> Option<FrameRequestFn> {
        let window = Arc::clone(&self.window);
        Some(Box::new(move || window.request_redraw()))
    }

    fn clock_fn(&self) -> Option<ClockFn> {
        let epoch = self.epoch;
        Some(Box::new(move || epoch.elapsed().as_secs_f64() * 1000.0))
    }
}
