//! Collection module — named row stores with deferred injector dispatch.
//!
//! The client core owns three collections (geometries, items, rigs);
//! each accepts one Injector strategy that materializes rows into
//! engine state during the client's update pass.

mod collection;

pub use collection::{Collection, CollectionEvent, CollectionRow};
