//! Perspective camera state.
//!
//! The camera is kept free of platform types so the web frontend and the
//! host-side tests share the same projection and orientation math.

use glam::{Mat4, Quat, Vec3};

use super::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_START};

/// Right-handed perspective camera looking at `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera sized to a `width` x `height` viewport with the default lens.
    pub fn for_viewport(width: u32, height: u32) -> Self {
        Self {
            position: CAMERA_START,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_deg: CAMERA_FOV_DEG,
            aspect: aspect_of(width, height),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = aspect_of(width, height);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_deg.to_radians(), self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space orientation of the camera (its local -Z looks at the target).
    pub fn orientation(&self) -> Quat {
        let (_, rotation, _) = self.view_matrix().inverse().to_scale_rotation_translation();
        rotation
    }

    /// Unit vector from the camera toward what it is looking at.
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }
}

/// Width / height, guarding against a zero-height mount.
#[inline]
pub fn aspect_of(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

/// Device-pixel size of a drawing surface shown at `width` x `height` CSS pixels.
#[inline]
pub fn backing_size(width: u32, height: u32, dpr: f64) -> (u32, u32) {
    let scale = |css: u32| ((css as f64 * dpr) as u32).max(1);
    (scale(width), scale(height))
}
