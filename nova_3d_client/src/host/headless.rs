/// Headless host — an in-process environment with no windowing system.
///
/// Backs CI runs and unit tests: viewport size is settable at any time,
/// the clock counts from construction, and frame requests are recorded
/// rather than scheduled. The detached/orphaned constructors produce the
/// broken chains the client must reject at construction.

use std::sync::{Arc, Mutex};
use std::time::Instant;
use super::env::{CanvasSurface, ClockFn, FrameRequestFn, HostCanvas, HostDocument, HostWindow};

/// Headless window with settable viewport size.
pub struct HeadlessWindow {
    size: Mutex<(u32, u32)>,
    epoch: Instant,
    frame_requests: Arc<Mutex<usize>>,
    clocked: bool,
    scheduled: bool,
}

impl HeadlessWindow {
    /// Create a full-featured headless window (clock and frame scheduler present).
    pub fn new(width: u32, height: u32) -> Arc<Self> {
        Arc::new(Self {
            size: Mutex::new((width, height)),
            epoch: Instant::now(),
            frame_requests: Arc::new(Mutex::new(0)),
            clocked: true,
            scheduled: true,
        })
    }

    /// Create a stripped headless window with no clock and no frame scheduler.
    ///
    /// Exercises the degraded paths: FPS measurement and frame scheduling
    /// are silently unavailable.
    pub fn minimal(width: u32, height: u32) -> Arc<Self> {
        Arc::new(Self {
            size: Mutex::new((width, height)),
            epoch: Instant::now(),
            frame_requests: Arc::new(Mutex::new(0)),
            clocked: false,
            scheduled: false,
        })
    }

    /// Change the reported viewport size.
    pub fn set_viewport_size(&self, width: u32, height: u32) {
        *self.size.lock().unwrap() = (width, height);
    }

    /// Number of frame requests issued through this window's scheduler.
    pub fn frame_request_count(&self) -> usize {
        *self.frame_requests.lock().unwrap()
    }
}

impl HostWindow for HeadlessWindow {
    fn viewport_size(&self) -> (u32, u32) {
        *self.size.lock().unwrap()
    }

    fn frame_request_fn(&self) -> Option<FrameRequestFn> {
        if !self.scheduled {
            return None;
        }
        let requests = Arc::clone(&self.frame_requests);
        Some(Box::new(move || {
            *requests.lock().unwrap() += 1;
        }))
    }

    fn clock_fn(&self) -> Option<ClockFn> {
        if !self.clocked {
            return None;
        }
        let epoch = self.epoch;
        Some(Box::new(move || epoch.elapsed().as_secs_f64() * 1000.0))
    }
}

/// Headless document holding an optional window view.
pub struct HeadlessDocument {
    view: Option<Arc<HeadlessWindow>>,
}

impl HeadlessDocument {
    /// Create a document presented in the given window.
    pub fn new(view: Arc<HeadlessWindow>) -> Arc<Self> {
        Arc::new(Self { view: Some(view) })
    }

    /// Create a windowless document (default_view resolves to None).
    pub fn windowless() -> Arc<Self> {
        Arc::new(Self { view: None })
    }
}

impl HostDocument for HeadlessDocument {
    fn default_view(&self) -> Option<Arc<dyn HostWindow>> {
        self.view
            .clone()
            .map(|window| window as Arc<dyn HostWindow>)
    }
}

/// Headless canvas holding an optional owning document.
pub struct HeadlessCanvas {
    document: Option<Arc<HeadlessDocument>>,
}

impl HeadlessCanvas {
    /// Create a canvas attached to the full chain: canvas -> document -> window.
    pub fn new(window: Arc<HeadlessWindow>) -> Arc<Self> {
        Arc::new(Self {
            document: Some(HeadlessDocument::new(window)),
        })
    }

    /// Create a detached canvas (owner_document resolves to None).
    pub fn detached() -> Arc<Self> {
        Arc::new(Self { document: None })
    }

    /// Create a canvas whose document has no window view.
    pub fn orphaned() -> Arc<Self> {
        Arc::new(Self {
            document: Some(HeadlessDocument::windowless()),
        })
    }
}

impl HostCanvas for HeadlessCanvas {
    fn owner_document(&self) -> Option<Arc<dyn HostDocument>> {
        self.document
            .clone()
            .map(|document| document as Arc<dyn HostDocument>)
    }

    fn surface(&self) -> CanvasSurface {
        // Surface size tracks the window viewport when the chain is intact.
        let (width, height) = self
            .document
            .as_ref()
            .and_then(|document| document.view.as_ref())
            .map(|window| window.viewport_size())
            .unwrap_or((0, 0));

        CanvasSurface {
            width,
            height,
            display_handle: None,
            window_handle: None,
        }
    }
}

#[cfg(test)]
#[path = "headless_tests.rs"]
mod tests;
