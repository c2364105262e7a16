//! Drag-to-orbit controls with a selectable drag mapping.
//!
//! The controls follow the usual spherical-orbit model around `target`:
//! drags accumulate azimuth/polar deltas that `update` applies (damped) to
//! the camera. With [`DragMapping::ObjectYaw`] the horizontal component is
//! handed back to the caller as an object yaw delta instead, so the camera
//! never moves horizontally.

use glam::Vec3;

use super::camera::Camera;
use super::constants::{DAMPING_FACTOR, POLAR_LOCK, ROTATE_SPEED};

const POLAR_EPS: f32 = 1e-6;
const CHANGE_EPS: f32 = 1e-7;

/// Where the horizontal drag delta goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMapping {
    /// Classic orbit: the camera circles the target.
    OrbitCamera,
    /// The loaded object spins about its own vertical axis.
    ObjectYaw,
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub rotate_speed: f32,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub enable_zoom: bool,
    pub min_polar: f32,
    pub max_polar: f32,
    pub mapping: DragMapping,
    delta_theta: f32,
    delta_phi: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            rotate_speed: ROTATE_SPEED,
            enable_damping: true,
            damping_factor: DAMPING_FACTOR,
            enable_zoom: false,
            min_polar: POLAR_LOCK,
            max_polar: POLAR_LOCK,
            mapping: DragMapping::ObjectYaw,
            delta_theta: 0.0,
            delta_phi: 0.0,
        }
    }
}

impl OrbitControls {
    pub fn with_mapping(mapping: DragMapping) -> Self {
        Self {
            mapping,
            ..Self::default()
        }
    }

    /// Feed a pointer drag of `(dx, dy)` CSS pixels over an element
    /// `element_height` pixels tall.
    ///
    /// Returns the yaw delta (radians) to apply to the object; always 0 for
    /// [`DragMapping::OrbitCamera`].
    pub fn drag(&mut self, dx: f32, dy: f32, element_height: f32) -> f32 {
        let h = element_height.max(1.0);
        let left = std::f32::consts::TAU * dx / h * self.rotate_speed;
        let up = std::f32::consts::TAU * dy / h * self.rotate_speed;
        self.delta_phi -= up;
        match self.mapping {
            DragMapping::OrbitCamera => {
                self.delta_theta -= left;
                0.0
            }
            DragMapping::ObjectYaw => -left,
        }
    }

    /// Apply pending deltas to `camera`; returns true when the camera moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let offset = camera.position - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return false;
        }
        let theta = offset.x.atan2(offset.z);
        let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        let (dt, dp) = if self.enable_damping {
            (
                self.delta_theta * self.damping_factor,
                self.delta_phi * self.damping_factor,
            )
        } else {
            (self.delta_theta, self.delta_phi)
        };
        let new_theta = theta + dt;
        let new_phi = (phi + dp)
            .clamp(self.min_polar, self.max_polar)
            .clamp(POLAR_EPS, std::f32::consts::PI - POLAR_EPS);

        if self.enable_damping {
            self.delta_theta *= 1.0 - self.damping_factor;
            self.delta_phi *= 1.0 - self.damping_factor;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
        }

        if (new_theta - theta).abs() < CHANGE_EPS && (new_phi - phi).abs() < CHANGE_EPS {
            return false;
        }
        let sin_phi = new_phi.sin();
        camera.position = self.target
            + Vec3::new(
                radius * sin_phi * new_theta.sin(),
                radius * new_phi.cos(),
                radius * sin_phi * new_theta.cos(),
            );
        camera.target = self.target;
        true
    }

    /// Current polar angle of `camera` around the target (0 = straight above).
    pub fn polar_angle(&self, camera: &Camera) -> f32 {
        let offset = camera.position - self.target;
        let radius = offset.length().max(f32::EPSILON);
        (offset.y / radius).clamp(-1.0, 1.0).acos()
    }
}
