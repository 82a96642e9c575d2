//! Resource module — row definition types for the client's collections.
//!
//! Definitions are pure data with typed slotmap keys. They become live
//! engine state (GPU uploads, scene items, rig bindings) only when an
//! injector processes them.

mod geometry;
mod item;
mod rig;

pub use geometry::{GeometryDef, GeometryKey};
pub use item::{ItemDef, ItemKey};
pub use rig::{RigDef, RigKey};
