//! Injector module — collection-to-engine synchronization strategies.
//!
//! Provides the Injector strategy trait plus the three strategies the
//! client installs at construction: geometries to GPU uploads, items to
//! scene items, rigs to item bindings.

mod injector;
mod geometry_injector;
mod item_injector;
mod rig_injector;

pub use injector::{Injector, InjectorCtx, NoOpInjector};
pub use geometry_injector::GeometryInjector;
pub use item_injector::ItemInjector;
pub use rig_injector::RigInjector;
