//! Host environment module — canvas, document, and window adapters.
//!
//! Provides the trait chain the client resolves at construction, plus a
//! headless implementation for tests/CI and a winit implementation for
//! desktop windows.

mod env;
mod headless;
mod winit_host;

pub use env::{
    CanvasSurface, ClockFn, FrameRequestFn, HostCanvas, HostDocument, HostWindow,
};
pub use headless::{HeadlessCanvas, HeadlessDocument, HeadlessWindow};
pub use winit_host::{WinitCanvas, WinitDocument, WinitWindow};
