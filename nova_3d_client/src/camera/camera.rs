/// Perspective camera — the client's single point of view.
///
/// A passive data container: the client owns and drives it, the renderer
/// only reads it. The projection matrix is cached; mutating the aspect
/// ratio takes effect only after an explicit `update_projection_matrix()`
/// call, mirroring how the resize flow separates the two steps.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

// ===== DEFAULTS =====

/// Narrow default field of view, in degrees
pub const DEFAULT_FOV_Y_DEGREES: f32 = 20.0;
/// Near clip plane distance
pub const DEFAULT_NEAR_PLANE: f32 = 1.0;
/// Far clip plane distance
pub const DEFAULT_FAR_PLANE: f32 = 100_000.0;
/// Aspect ratio before the first resize
pub const DEFAULT_ASPECT: f32 = 1.0;
/// Rest height above the origin
pub const DEFAULT_EYE_HEIGHT: f32 = 170.0;
/// Rest distance back from the origin along +Z
pub const DEFAULT_EYE_DISTANCE: f32 = 1_200.0;

// ===== CAMERA =====

/// A perspective camera with a cached projection matrix.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees
    fov_y_degrees: f32,
    /// Width / height ratio
    aspect: f32,
    /// Near clip plane
    near: f32,
    /// Far clip plane
    far: f32,
    /// World-space position; orientation is fixed looking down -Z
    position: Vec3,
    /// Cached projection, refreshed by update_projection_matrix()
    projection_matrix: Mat4,
}

impl PerspectiveCamera {
    /// Create a camera with the client defaults: 20 degree FOV, square
    /// aspect, and the rest position above and behind the origin.
    pub fn new() -> Self {
        Self::with_settings(
            DEFAULT_FOV_Y_DEGREES,
            DEFAULT_ASPECT,
            DEFAULT_NEAR_PLANE,
            DEFAULT_FAR_PLANE,
        )
    }

    /// Create a camera with explicit projection settings.
    ///
    /// # Arguments
    ///
    /// * `fov_y_degrees` - Vertical field of view in degrees
    /// * `aspect` - Width / height ratio
    /// * `near` - Near clip plane distance
    /// * `far` - Far clip plane distance
    pub fn with_settings(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            fov_y_degrees,
            aspect,
            near,
            far,
            position: Vec3::new(0.0, DEFAULT_EYE_HEIGHT, DEFAULT_EYE_DISTANCE),
            projection_matrix: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    pub fn fov_y_degrees(&self) -> f32 {
        self.fov_y_degrees
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Change the aspect ratio.
    ///
    /// Does NOT refresh the cached projection; call
    /// `update_projection_matrix()` when done mutating.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Recompute the cached projection matrix from the current settings.
    pub fn update_projection_matrix(&mut self) {
        self.projection_matrix = Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        );
    }

    /// Cached projection matrix.
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// View matrix: the inverse of the camera's world transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position).inverse()
    }

    /// Combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix()
    }

    /// GPU-ready snapshot of the camera state.
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection_matrix().to_cols_array_2d(),
            position: Vec4::new(self.position.x, self.position.y, self.position.z, 1.0)
                .to_array(),
        }
    }
}

// ===== GPU UNIFORM =====

/// Camera data laid out for direct buffer upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    /// Column-major view-projection matrix
    pub view_projection: [[f32; 4]; 4],
    /// World-space position (w = 1)
    pub position: [f32; 4],
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
