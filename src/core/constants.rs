use glam::Vec3;

// Camera/lighting/framing tuning shared by every viewer instance.

// Perspective camera
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 20.0); // before the model is framed

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.2; // only keeps unlit faces off pure black
pub const HEADLIGHT_INTENSITY: f32 = 0.8;
pub const LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const HEADLIGHT_START: Vec3 = Vec3::new(0.0, 0.0, 1.0);

// Scene
pub const CLEAR_COLOR: [f64; 4] = [1.0, 1.0, 1.0, 1.0];

// Orbit controls
pub const ROTATE_SPEED: f32 = 0.7;
pub const DAMPING_FACTOR: f32 = 0.05;
pub const POLAR_LOCK: f32 = std::f32::consts::FRAC_PI_2; // min == max, vertical orbit disabled
pub const AUTO_ROTATE_SPEED: f32 = 0.01; // rad per frame when enabled

// Loaded model placement
pub const MODEL_SCALE: f32 = 0.5;
pub const FRAMING_PADDING: f32 = 1.5;
pub const TINT_RGB: u32 = 0xfafafa; // light gray
pub const MODEL_TILT: [f32; 3] = [0.5, 0.9, -0.5]; // pitch, yaw, roll (radians)

/// Convert a packed `0xRRGGBB` color into linear-ish float channels.
#[inline]
pub fn rgb_hex(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

// Modal sequencing (CSS transitions are driven by these fixed delays)
pub const MODAL_OPEN_DEFER_MS: i32 = 10; // lets the display change land before transitions start
pub const MODAL_CLOSE_DELAY_MS: i32 = 400; // matches the panel slide duration
