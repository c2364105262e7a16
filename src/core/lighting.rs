use glam::{Quat, Vec3};

use super::constants::{AMBIENT_INTENSITY, HEADLIGHT_INTENSITY, HEADLIGHT_START, LIGHT_COLOR};

/// Ambient fill plus one directional light that follows the camera.
#[derive(Clone, Debug, PartialEq)]
pub struct Lights {
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    pub headlight_color: [f32; 3],
    pub headlight_intensity: f32,
    /// Directional light position; the light shines from here toward the origin.
    pub headlight_position: Vec3,
}

impl Default for Lights {
    fn default() -> Self {
        Self {
            ambient_color: LIGHT_COLOR,
            ambient_intensity: AMBIENT_INTENSITY,
            headlight_color: LIGHT_COLOR,
            headlight_intensity: HEADLIGHT_INTENSITY,
            headlight_position: HEADLIGHT_START,
        }
    }
}

impl Lights {
    /// Re-aim the headlight so it lights whatever face the camera sees.
    pub fn follow_camera(&mut self, camera_orientation: Quat) {
        self.headlight_position = headlight_position(camera_orientation);
    }

    /// Unit direction the headlight travels (position toward origin).
    pub fn headlight_direction(&self) -> Vec3 {
        (-self.headlight_position).normalize_or_zero()
    }
}

/// Opposite of the camera's view direction.
#[inline]
pub fn headlight_position(camera_orientation: Quat) -> Vec3 {
    -(camera_orientation * Vec3::NEG_Z)
}
