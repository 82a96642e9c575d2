/// Client core — the game-client state the rendering shell composes.
///
/// Owns what a client is regardless of how it renders: the three row
/// collections, the configuration, and the FPS counter. The shell
/// (RenderClient) wires rendering state around this core and calls
/// through for collection setup, event dispatch, and disposal.

use crate::client_debug;
use crate::collection::Collection;
use crate::host::ClockFn;
use crate::injector::InjectorCtx;
use crate::resource::{
    GeometryDef, GeometryKey, ItemDef, ItemKey, RigDef, RigKey,
};
use super::config::ClientConfig;
use super::fps::FpsCounter;

/// The composed game-client core.
pub struct ClientCore {
    /// Client configuration, fixed at construction
    config: ClientConfig,
    /// Geometry definitions, uploaded by the geometry injector
    geometries: Collection<GeometryKey, GeometryDef>,
    /// Item definitions, materialized by the item injector
    items: Collection<ItemKey, ItemDef>,
    /// Rig definitions, bound by the rig injector
    rigs: Collection<RigKey, RigDef>,
    /// Frame-rate tracker over the host clock
    fps: FpsCounter,
}

impl ClientCore {
    /// Create a core with empty collections.
    ///
    /// # Arguments
    ///
    /// * `config` - Client configuration
    /// * `clock` - Host millisecond clock for FPS measurement, if any
    pub fn new(config: ClientConfig, clock: Option<ClockFn>) -> Self {
        Self {
            config,
            geometries: Collection::new("geometries"),
            items: Collection::new("items"),
            rigs: Collection::new("rigs"),
            fps: FpsCounter::new(clock),
        }
    }

    /// Reset the three collections to empty.
    ///
    /// The shell calls through here before attaching its injectors, so
    /// extended setup always starts from clean collections.
    pub fn initialize_collections(&mut self) {
        self.geometries.clear();
        self.items.clear();
        self.rigs.clear();
        client_debug!("nova3d::ClientCore", "Collections initialized");
    }

    /// Drain pending collection events into the attached injectors.
    ///
    /// Geometries dispatch first so items can refer to them, then items
    /// so rigs can find their targets.
    pub fn dispatch_collection_events(&mut self, ctx: &mut InjectorCtx<'_>) {
        self.geometries.dispatch_events(ctx);
        self.items.dispatch_events(ctx);
        self.rigs.dispatch_events(ctx);
    }

    /// Tear the core down: drop all rows and detach the injectors.
    pub fn dispose(&mut self) {
        self.geometries.clear();
        self.geometries.clear_injector();
        self.items.clear();
        self.items.clear_injector();
        self.rigs.clear();
        self.rigs.clear_injector();
        client_debug!("nova3d::ClientCore", "Core disposed");
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn geometries(&self) -> &Collection<GeometryKey, GeometryDef> {
        &self.geometries
    }

    pub fn geometries_mut(&mut self) -> &mut Collection<GeometryKey, GeometryDef> {
        &mut self.geometries
    }

    pub fn items(&self) -> &Collection<ItemKey, ItemDef> {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Collection<ItemKey, ItemDef> {
        &mut self.items
    }

    pub fn rigs(&self) -> &Collection<RigKey, RigDef> {
        &self.rigs
    }

    pub fn rigs_mut(&mut self) -> &mut Collection<RigKey, RigDef> {
        &mut self.rigs
    }

    pub fn fps(&self) -> &FpsCounter {
        &self.fps
    }

    pub fn fps_mut(&mut self) -> &mut FpsCounter {
        &mut self.fps
    }
}

#[cfg(test)]
#[path = "client_core_tests.rs"]
mod tests;
