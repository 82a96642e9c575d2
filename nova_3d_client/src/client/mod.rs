//! Client module — the client core and its rendering shell.
//!
//! ClientCore owns configuration, collections, and the FPS counter;
//! RenderClient composes the core with a renderer, camera, scene, and
//! debounced resize handling. Embedders construct a RenderClient and
//! drive it from their event loop.

mod client_core;
mod config;
mod fps;
mod render_client;
mod resize;

pub use client_core::ClientCore;
pub use config::{ClientConfig, DEFAULT_BACKGROUND};
pub use fps::{FpsCounter, MEASUREMENT_WINDOW_MS};
pub use render_client::RenderClient;
pub use resize::{ResizeDebounce, RESIZE_DEBOUNCE_MS};
