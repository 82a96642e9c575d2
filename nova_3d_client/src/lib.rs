/*!
# Nova 3D Client

Rendering client for the Nova3D engine.

This crate provides the host-facing rendering client: it resolves a
canvas / document / window environment, owns one renderer (created
through a backend factory), one perspective camera, and one scene, and
keeps the embedder's game collections synchronized with engine state
through injection strategies. Backends (WebGL, Vulkan, a test recorder)
plug in behind the Renderer trait.

## Architecture

- **RenderClient**: Composition root driven by the host event loop
- **ClientCore**: Collections, configuration, and FPS tracking
- **Renderer / RendererFactory**: Backend seam
- **Collection / Injector**: Deferred row-to-engine synchronization
- **HostCanvas / HostDocument / HostWindow**: Environment adapters

The client never talks to a concrete windowing system; hosts implement
the environment traits (a winit implementation and a headless one ship
with the crate).
*/

// Internal modules
mod error;
pub mod log;
pub mod camera;
pub mod client;
pub mod collection;
pub mod host;
pub mod injector;
pub mod renderer;
pub mod resource;
pub mod scene;

// Main nova3d namespace module
pub mod nova3d {
    // Error types
    pub use crate::error::{Nova3dError, Nova3dResult};

    // The client
    pub use crate::client::{ClientConfig, ClientCore, RenderClient};

    // Renderer seam
    pub use crate::renderer::{Renderer, RendererFactory};

    // Logging sub-module (types and dispatch entry points, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, dispatch, dispatch_detailed,
        };
        // Note: client_* macros are exported at the crate root
    }

    // Client sub-module with configuration and timing types
    pub mod client {
        pub use crate::client::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Collection sub-module
    pub mod collection {
        pub use crate::collection::*;
    }

    // Host environment sub-module
    pub mod host {
        pub use crate::host::*;
    }

    // Injector sub-module
    pub mod injector {
        pub use crate::injector::*;
    }

    // Render sub-module with all rendering types
    pub mod render {
        pub use crate::renderer::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
