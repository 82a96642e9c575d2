/// Geometry injector — forwards geometry rows to the rendering backend.
///
/// Insertion uploads the definition to GPU memory, removal discards it.
/// Without a live renderer both directions degrade to no-ops; the rows
/// stay in the collection and a later injector replay (after a renderer
/// re-initialization with a fresh attach) can upload them again.

use crate::client_warn;
use crate::resource::{GeometryDef, GeometryKey};
use super::injector::{Injector, InjectorCtx};

/// Synchronizes the geometry collection with the backend's GPU memory.
pub struct GeometryInjector;

impl GeometryInjector {
    pub fn new() -> Self {
        Self
    }
}

impl Injector for GeometryInjector {
    type Key = GeometryKey;
    type Row = GeometryDef;

    fn row_inserted(&mut self, _key: GeometryKey, row: &GeometryDef, ctx: &mut InjectorCtx<'_>) {
        let Some(renderer) = ctx.renderer.as_deref_mut() else {
            // Degraded operation: no renderer to upload into
            return;
        };
        if let Err(error) = renderer.upload_geometry(row) {
            client_warn!(
                "nova3d::GeometryInjector",
                "Upload of geometry '{}' failed: {}",
                row.name(),
                error
            );
        }
    }

    fn row_removed(&mut self, _key: GeometryKey, row: &GeometryDef, ctx: &mut InjectorCtx<'_>) {
        if let Some(renderer) = ctx.renderer.as_deref_mut() {
            renderer.discard_geometry(row.name());
        }
    }
}

#[cfg(test)]
#[path = "geometry_injector_tests.rs"]
mod tests;
