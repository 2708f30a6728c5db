//! Visual-side types shared with the frontends.
//!
//! These types intentionally avoid referencing platform-specific APIs and
//! are suitable for use on both native and web targets. The frontends
//! consume them to build camera matrices and per-instance GPU data.

use glam::{Mat4, Vec3};

use crate::constants::{CONFETTI_SIZE, RIBBON_LENGTH, RIBBON_WIDTH};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    /// Combined view-projection, ready for the scene uniform.
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Per-instance data uploaded to the instanced vertex buffer: a
/// column-major model matrix plus an RGBA color.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl InstanceRaw {
    #[inline]
    pub fn new(model: Mat4, color: [f32; 3]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [color[0], color[1], color[2], 1.0],
        }
    }
}

/// Confetti base mesh: a small square in the local XY plane, centered at
/// the origin. Two triangles, positions only.
pub fn confetti_vertices() -> [[f32; 3]; 6] {
    let h = CONFETTI_SIZE / 2.0;
    [
        [-h, -h, 0.0],
        [h, -h, 0.0],
        [h, h, 0.0],
        [-h, -h, 0.0],
        [h, h, 0.0],
        [-h, h, 0.0],
    ]
}

/// Ribbon base mesh: a thin strip in the local XZ plane with its long axis
/// along +X, which the curve transform aligns with the path tangent.
pub fn ribbon_vertices() -> [[f32; 3]; 6] {
    let l = RIBBON_LENGTH / 2.0;
    let w = RIBBON_WIDTH / 2.0;
    [
        [-l, 0.0, -w],
        [l, 0.0, -w],
        [l, 0.0, w],
        [-l, 0.0, -w],
        [l, 0.0, w],
        [-l, 0.0, w],
    ]
}
