pub mod asset;
pub mod bounds;
pub mod camera;
pub mod constants;
pub mod framing;
pub mod lighting;
pub mod load;
pub mod modal;
pub mod orbit;
pub mod viewer;

pub use asset::{ModelAsset, MeshPart, MeshVertex};
pub use camera::Camera;
pub use load::{LoadError, LoadEvent, LoadProgress, SinkUpdate};
pub use modal::{ModalConfig, ModalController, ModalHost, ModalPhase, ModalTimer};
pub use orbit::{DragMapping, OrbitControls};
pub use viewer::{RecolorPolicy, ViewerConfig, ViewerState};

// Shader bundled as a string constant
pub static MESH_WGSL: &str = include_str!("../../shaders/mesh.wgsl");
