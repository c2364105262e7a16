//! Open/close sequencing for the slide-in viewer modal.
//!
//! The controller owns the phase machine and the single viewer attached to
//! the modal's mount; everything that touches the page goes through
//! [`ModalHost`]. Delayed steps are scheduled on the host and come back via
//! [`ModalController::fire`] tagged with the generation that scheduled
//! them, so a timer left over from an earlier open/close is ignored.

use super::constants::{MODAL_CLOSE_DELAY_MS, MODAL_OPEN_DEFER_MS};
use super::load::BUILD_ERROR_TEXT;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalConfig {
    pub asset_path: String,
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalTimer {
    /// Start the enter transition once the panels are displayed.
    Enter(u64),
    /// Take the panels out of layout after the exit transition.
    Hide(u64),
}

/// Page-side operations the controller needs.
pub trait ModalHost {
    type Viewer;

    /// Toggle `display` of overlay and panel.
    fn set_displayed(&mut self, displayed: bool);
    /// Drive the CSS transitions: overlay opacity and panel offset.
    fn set_slid_in(&mut self, slid_in: bool);
    /// Remove every child of the model mount and insert a fresh progress sink.
    fn reset_mount(&mut self);
    /// Build and start a viewer inside the (freshly reset) mount.
    fn build_viewer(&mut self, asset_path: &str) -> anyhow::Result<Self::Viewer>;
    /// Stop a replaced viewer's render loop and listeners.
    fn dispose_viewer(&mut self, viewer: Self::Viewer);
    /// Write into the progress sink.
    fn show_status(&mut self, text: &str);
    fn schedule(&mut self, delay_ms: i32, timer: ModalTimer);
}

pub struct ModalController<H: ModalHost> {
    pub config: ModalConfig,
    pub host: H,
    phase: ModalPhase,
    generation: u64,
    viewer: Option<H::Viewer>,
}

impl<H: ModalHost> ModalController<H> {
    pub fn new(config: ModalConfig, host: H) -> Self {
        Self {
            config,
            host,
            phase: ModalPhase::Closed,
            generation: 0,
            viewer: None,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, ModalPhase::Opening | ModalPhase::Open)
    }

    pub fn viewer(&self) -> Option<&H::Viewer> {
        self.viewer.as_ref()
    }

    pub fn open(&mut self) {
        self.generation += 1;
        self.phase = ModalPhase::Opening;
        self.host.set_displayed(true);
        self.host
            .schedule(MODAL_OPEN_DEFER_MS, ModalTimer::Enter(self.generation));

        // The mount must be empty before the next surface is attached.
        if let Some(old) = self.viewer.take() {
            self.host.dispose_viewer(old);
        }
        self.host.reset_mount();
        match self.host.build_viewer(&self.config.asset_path) {
            Ok(v) => self.viewer = Some(v),
            Err(e) => {
                log::error!("[modal] viewer construction failed: {:?}", e);
                self.host.show_status(BUILD_ERROR_TEXT);
            }
        }
        log::info!("[modal] open (generation {})", self.generation);
    }

    pub fn close(&mut self) {
        if self.phase == ModalPhase::Closed {
            return;
        }
        self.generation += 1;
        self.phase = ModalPhase::Closing;
        self.host.set_slid_in(false);
        self.host
            .schedule(MODAL_CLOSE_DELAY_MS, ModalTimer::Hide(self.generation));
        log::info!("[modal] close (generation {})", self.generation);
    }

    /// Deliver a timer scheduled through [`ModalHost::schedule`].
    pub fn fire(&mut self, timer: ModalTimer) {
        match timer {
            ModalTimer::Enter(g) if g == self.generation && self.phase == ModalPhase::Opening => {
                self.host.set_slid_in(true);
                self.phase = ModalPhase::Open;
            }
            ModalTimer::Hide(g) if g == self.generation && self.phase == ModalPhase::Closing => {
                self.host.set_displayed(false);
                self.phase = ModalPhase::Closed;
            }
            stale => log::debug!("[modal] ignoring stale timer {:?}", stale),
        }
    }
}
