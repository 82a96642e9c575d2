//! Scene module — the render-graph root and its item types.
//!
//! The client owns exactly one Scene; items enter and leave it through
//! the item injector, never directly from game code.

mod color;
mod scene;
mod scene_item;

pub use color::Color;
pub use scene::Scene;
pub use scene_item::{
    SceneItem, SceneItemKey,
    FLAG_VISIBLE, FLAG_CAST_SHADOW, FLAG_OUTLINED,
};
