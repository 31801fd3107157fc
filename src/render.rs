//! Render Scheduling
//!
//! Tracks a single dirty flag between state changes and display frames.
//! The display is never redrawn for an unchanged state, and is always
//! redrawn at least once after a change, since the flag is checked on
//! every loop iteration.

use crate::radio::state::TuningState;

/// Display capability: draw one frame from a state snapshot
pub trait FrameSink {
    /// Render error type
    type Error;

    /// Draw the frame for the given state
    fn render(&mut self, state: &TuningState) -> Result<(), Self::Error>;
}

/// Dirty-flag render scheduler
#[derive(Clone, Copy, Debug)]
pub struct RenderScheduler {
    dirty: bool,
}

impl RenderScheduler {
    /// Create a scheduler; starts dirty so the first frame is drawn
    #[must_use]
    pub const fn new() -> Self {
        Self { dirty: true }
    }

    /// Mark the rendered view stale relative to the current state
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Check whether a redraw is pending
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Render once if dirty, returns whether a frame was drawn
    ///
    /// The flag is cleared only after a successful render; a failed
    /// render leaves it set so the next iteration retries the frame.
    pub fn flush<D: FrameSink>(
        &mut self,
        state: &TuningState,
        sink: &mut D,
    ) -> Result<bool, D::Error> {
        if !self.dirty {
            return Ok(false);
        }
        sink.render(state)?;
        self.dirty = false;
        Ok(true)
    }
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new()
    }
}
