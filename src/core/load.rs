use super::asset::ModelAsset;

// User-facing copy written into the progress sink.
pub const LOADING_TEXT: &str = "Loading model...";
pub const LOAD_ERROR_TEXT: &str =
    "Error loading the model. Check that the .gltf and .bin files are in the same folder.";
pub const BUILD_ERROR_TEXT: &str = "Error loading the model. See the console for details.";

/// Bytes received so far; `total` is `None` when the server gave no length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadProgress {
    pub loaded: u64,
    pub total: Option<u64>,
}

impl LoadProgress {
    /// Rounded percentage, when determinable.
    pub fn percent(&self) -> Option<u32> {
        match self.total {
            Some(total) if total > 0 => {
                Some(((self.loaded as f64 / total as f64) * 100.0).round() as u32)
            }
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request for {url} failed: {reason}")]
    Fetch { url: String, reason: String },
    #[error("request for {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("invalid glTF: {0}")]
    Parse(String),
    #[error("buffer {index} could not be resolved: {reason}")]
    Buffer { index: usize, reason: String },
    #[error("asset contains no triangle geometry")]
    NoGeometry,
}

/// One step of the asynchronous load protocol.
#[derive(Debug)]
pub enum LoadEvent {
    Progress(LoadProgress),
    Loaded(ModelAsset),
    Failed(LoadError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Loaded,
    Failed,
}

impl LoadPhase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, LoadPhase::Loading)
    }
}

/// What the progress sink should show after an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkUpdate {
    Text(String),
    Hide,
}

pub fn progress_text(progress: &LoadProgress) -> String {
    match progress.percent() {
        Some(pct) => format!("{} {}%", LOADING_TEXT, pct),
        None => LOADING_TEXT.to_string(),
    }
}
