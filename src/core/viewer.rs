//! Platform-independent state of one viewer instance.
//!
//! The web frontend owns the canvas, GPU surface and event listeners; all
//! decisions about camera framing, drag handling, headlight placement and
//! the load protocol are made here so they can be exercised on the host.

use glam::{EulerRot, Mat4, Quat, Vec3};

use super::asset::ModelAsset;
use super::bounds::Aabb;
use super::camera::Camera;
use super::constants::{rgb_hex, AUTO_ROTATE_SPEED, FRAMING_PADDING, MODEL_SCALE, MODEL_TILT, TINT_RGB};
use super::framing::fit_box;
use super::lighting::Lights;
use super::load::{progress_text, LoadEvent, LoadPhase, SinkUpdate, LOAD_ERROR_TEXT};
use super::orbit::{DragMapping, OrbitControls};

/// What happens to the asset's own material colors on load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecolorPolicy {
    Keep,
    Tint([f32; 3]),
}

impl Default for RecolorPolicy {
    fn default() -> Self {
        RecolorPolicy::Tint(rgb_hex(TINT_RGB))
    }
}

/// Per-instance settings; immutable once the viewer is built.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub asset_path: String,
    /// Initial pitch/yaw/roll of the wrapper transform, radians.
    pub tilt: Vec3,
    pub recolor: RecolorPolicy,
    pub model_scale: f32,
    pub framing_padding: f32,
    pub mapping: DragMapping,
    pub auto_rotate: bool,
}

impl ViewerConfig {
    pub fn new(asset_path: impl Into<String>) -> Self {
        Self {
            asset_path: asset_path.into(),
            tilt: Vec3::from(MODEL_TILT),
            recolor: RecolorPolicy::default(),
            model_scale: MODEL_SCALE,
            framing_padding: FRAMING_PADDING,
            mapping: DragMapping::ObjectYaw,
            auto_rotate: false,
        }
    }

    pub fn with_tilt(mut self, pitch: f32, yaw: f32, roll: f32) -> Self {
        self.tilt = Vec3::new(pitch, yaw, roll);
        self
    }

    pub fn with_recolor(mut self, recolor: RecolorPolicy) -> Self {
        self.recolor = recolor;
        self
    }

    pub fn with_mapping(mut self, mapping: DragMapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn with_auto_rotate(mut self, on: bool) -> Self {
        self.auto_rotate = on;
        self
    }
}

/// Transform chain of the loaded object: `wrapper(rotation) * translate(offset) * scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub scale: f32,
    /// Moves the scaled bounding-box center onto the wrapper origin.
    pub offset: Vec3,
    /// Wrapper Euler angles (XYZ order); `y` also carries user yaw.
    pub rotation: Vec3,
}

impl Placement {
    /// The object's transform inside the wrapper.
    pub fn inner_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), Quat::IDENTITY, self.offset)
    }

    pub fn wrapper_matrix(&self) -> Mat4 {
        Mat4::from_quat(Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        ))
    }

    pub fn model_matrix(&self) -> Mat4 {
        self.wrapper_matrix() * self.inner_matrix()
    }

    pub fn yaw(&self) -> f32 {
        self.rotation.y
    }
}

#[derive(Clone, Debug)]
pub struct LoadedModel {
    pub asset: ModelAsset,
    /// Asset-space bounds before scaling/centering.
    pub bounds: Aabb,
    pub placement: Placement,
}

pub struct ViewerState {
    pub config: ViewerConfig,
    pub camera: Camera,
    pub controls: OrbitControls,
    pub lights: Lights,
    pub model: Option<LoadedModel>,
    pub phase: LoadPhase,
    /// Mount content box in CSS pixels.
    pub viewport: (u32, u32),
    auto_rotate: bool,
}

impl ViewerState {
    pub fn new(config: ViewerConfig, width: u32, height: u32) -> Self {
        let controls = OrbitControls::with_mapping(config.mapping);
        let auto_rotate = config.auto_rotate;
        Self {
            config,
            camera: Camera::for_viewport(width, height),
            controls,
            lights: Lights::default(),
            model: None,
            phase: LoadPhase::Loading,
            viewport: (width, height),
            auto_rotate,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Advance the load protocol; returns what the progress sink should show.
    ///
    /// Success and failure are terminal: anything arriving afterwards is
    /// ignored.
    pub fn apply_load(&mut self, event: LoadEvent) -> Option<SinkUpdate> {
        if self.phase.is_terminal() {
            log::warn!("[viewer] load event after completion ignored: {:?}", self.phase);
            return None;
        }
        match event {
            LoadEvent::Progress(p) => Some(SinkUpdate::Text(progress_text(&p))),
            LoadEvent::Loaded(asset) => {
                self.install_model(asset);
                self.phase = LoadPhase::Loaded;
                Some(SinkUpdate::Hide)
            }
            LoadEvent::Failed(err) => {
                log::error!("[viewer] failed to load {}: {}", self.config.asset_path, err);
                self.phase = LoadPhase::Failed;
                Some(SinkUpdate::Text(LOAD_ERROR_TEXT.to_string()))
            }
        }
    }

    fn install_model(&mut self, mut asset: ModelAsset) {
        if let RecolorPolicy::Tint(rgb) = self.config.recolor {
            asset.recolor(rgb);
        }
        let bounds = asset.bounds();
        let scale = self.config.model_scale;
        let scaled = bounds.transformed(&Mat4::from_scale(Vec3::splat(scale)));
        let placement = Placement {
            scale,
            offset: -scaled.center(),
            rotation: self.config.tilt,
        };

        let distance = fit_box(
            &scaled,
            self.camera.fov_deg,
            self.camera.aspect,
            self.config.framing_padding,
        );
        let axis = (self.camera.position - self.controls.target)
            .try_normalize()
            .unwrap_or(Vec3::Z);
        self.controls.target = Vec3::ZERO;
        self.camera.target = Vec3::ZERO;
        self.camera.position = self.controls.target + axis * distance;
        self.controls.update(&mut self.camera);

        log::info!(
            "[viewer] model ready: {} triangles, size=({:.3},{:.3},{:.3}) camera distance {:.3}",
            asset.triangle_count(),
            scaled.size().x,
            scaled.size().y,
            scaled.size().z,
            distance
        );
        self.model = Some(LoadedModel {
            asset,
            bounds,
            placement,
        });
    }

    /// Pointer pressed on the canvas: user interaction cancels auto-rotation.
    pub fn pointer_down(&mut self) {
        self.auto_rotate = false;
    }

    /// Horizontal/vertical drag in CSS pixels.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        let yaw = self.controls.drag(dx, dy, self.viewport.1 as f32);
        if let Some(m) = &mut self.model {
            m.placement.rotation.y += yaw;
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.camera.set_viewport(width, height);
    }

    /// Per-frame update: orbit damping, auto-rotate, headlight.
    pub fn tick(&mut self) {
        self.controls.update(&mut self.camera);
        if self.auto_rotate {
            if let Some(m) = &mut self.model {
                m.placement.rotation.y += AUTO_ROTATE_SPEED;
            }
        }
        self.lights.follow_camera(self.camera.orientation());
    }

    pub fn model_matrix(&self) -> Option<Mat4> {
        self.model.as_ref().map(|m| m.placement.model_matrix())
    }
}

/// Viewers outside the modal fail on their own: the error is logged and the
/// page carries on without that viewer.
pub fn keep_or_log<V>(label: &str, built: anyhow::Result<Option<V>>) -> Option<V> {
    built.unwrap_or_else(|e| {
        log::error!("{}: {:?}", label, e);
        None
    })
}
