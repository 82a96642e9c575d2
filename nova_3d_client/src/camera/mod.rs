//! Camera module — the client's perspective projection.
//!
//! Provides a passive data container for the rendering pipeline.
//! The client owns exactly one camera and drives its aspect ratio from
//! the resize flow; renderers only read it.

mod camera;

pub use camera::{
    PerspectiveCamera, CameraUniform,
    DEFAULT_FOV_Y_DEGREES, DEFAULT_NEAR_PLANE, DEFAULT_FAR_PLANE,
    DEFAULT_ASPECT, DEFAULT_EYE_HEIGHT, DEFAULT_EYE_DISTANCE,
};
