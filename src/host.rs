use anyhow::Result;
use lifeframe::PixelBuffer;

use crate::stats::Report;

pub enum HostCommand {
    Exit,
    Continue,
}

/// A presentation surface driven once per frame by the host loop
pub trait Host {
    /// Shows a freshly drawn frame
    fn present(&mut self, pixels: &PixelBuffer) -> Result<()>;

    /// Handles all input queued since the last frame, without blocking
    fn poll_events(&mut self) -> Result<HostCommand>;

    fn report(&mut self, report: Report) {
        tracing::info!(
            gens_per_sec = report.gens_per_sec,
            generations = report.generations,
            alive = report.alive,
            "progress"
        );
    }
}

/// A host without a display; frames are drawn and then dropped
#[derive(Default)]
pub struct HeadlessHost {
    frames: u64,
}

impl HeadlessHost {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Host for HeadlessHost {
    fn present(&mut self, _pixels: &PixelBuffer) -> Result<()> {
        self.frames += 1;
        Ok(())
    }

    fn poll_events(&mut self) -> Result<HostCommand> {
        Ok(HostCommand::Continue)
    }
}
