/// Client configuration.
///
/// Fixed at construction: the client reads it once while wiring the
/// scene background, shadow mapping, and rendering context; later
/// mutations require a renderer re-initialization to take effect.

use crate::renderer::ContextOptions;

/// Scene background when the embedder does not pick one (neutral dark).
pub const DEFAULT_BACKGROUND: u32 = 0x202028;

/// Configuration for a render client.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientConfig {
    /// Scene background color as 0xRRGGBB
    pub background: u32,
    /// Enable shadow mapping
    pub shadows: bool,
    /// Rendering-context options handed to the renderer factory
    pub context: ContextOptions,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            shadows: false,
            context: ContextOptions::default(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
