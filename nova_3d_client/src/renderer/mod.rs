/// Renderer module - backend seam, configuration types, and outline effect

// Module declarations
pub mod renderer;
pub mod outline_effect;
pub mod mock_renderer;

// Re-export everything from renderer.rs
pub use renderer::*;

// Re-export from other modules
pub use outline_effect::*;
