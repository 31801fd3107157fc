//! Input Debouncing
//!
//! Window-based debouncing for the mechanical input lines. Each line
//! carries its own context (stable level, last accepted transition
//! time); a level change is accepted only if at least one debounce
//! window has elapsed since the last accepted transition on that line.
//! Changes inside the window are contact bounce and are ignored.
//!
//! Rotary ticks arrive pre-quantized from the quadrature decoder and
//! bypass the level debounce entirely.

use crate::config::DEBOUNCE_WINDOW_MS;
use super::InputEvent;

/// Maximum events produced by one debouncer poll
pub const MAX_EVENTS_PER_POLL: usize = 8;

/// Accepted level transition on a debounced line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// Low-to-high transition
    Rising,
    /// High-to-low transition
    Falling,
}

/// Debounce context for one mechanical input line
#[derive(Clone, Copy, Debug)]
pub struct DebouncedLine {
    /// Last accepted level (true = high)
    level: bool,
    /// Timestamp of the last accepted transition, milliseconds
    last_transition_ms: u32,
    /// Minimum time between accepted transitions
    window_ms: u32,
}

impl DebouncedLine {
    /// Create a line context with an initial stable level
    #[must_use]
    pub const fn new(initial_level: bool, window_ms: u32) -> Self {
        Self {
            level: initial_level,
            last_transition_ms: 0,
            window_ms,
        }
    }

    /// Get the last accepted level
    #[must_use]
    pub const fn level(&self) -> bool {
        self.level
    }

    /// Feed one raw level sample, returns an accepted transition if any
    pub fn update(&mut self, level: bool, now_ms: u32) -> Option<Edge> {
        if level == self.level {
            return None;
        }

        // Timestamps wrap; wrapping_sub keeps the elapsed math correct.
        let elapsed = now_ms.wrapping_sub(self.last_transition_ms);
        if elapsed < self.window_ms {
            return None;
        }

        self.level = level;
        self.last_transition_ms = now_ms;
        Some(if level { Edge::Rising } else { Edge::Falling })
    }
}

/// Raw input sample for one reactive-loop iteration
#[derive(Clone, Copy, Debug, Default)]
pub struct RawSample {
    /// Signed detent count from the quadrature decoder since last poll
    pub encoder_ticks: i32,
    /// Encoder switch level (true = high; the line idles high)
    pub switch_level: bool,
    /// PTT level (true = high; the line idles high)
    pub ptt_level: bool,
}

/// Debouncer for all operator input lines
///
/// The encoder switch and PTT carry independent debounce timers;
/// a bouncing PTT never masks a switch press or vice versa.
pub struct InputDebouncer {
    switch: DebouncedLine,
    ptt: DebouncedLine,
}

impl InputDebouncer {
    /// Create a debouncer; both lines idle high (pull-ups)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            switch: DebouncedLine::new(true, DEBOUNCE_WINDOW_MS),
            ptt: DebouncedLine::new(true, DEBOUNCE_WINDOW_MS),
        }
    }

    /// Process one raw sample, producing zero or more discrete events
    ///
    /// At most one switch event and one PTT event per debounce window;
    /// encoder ticks are forwarded unconditionally.
    pub fn poll(
        &mut self,
        sample: RawSample,
        now_ms: u32,
    ) -> heapless::Vec<InputEvent, MAX_EVENTS_PER_POLL> {
        let mut events = heapless::Vec::new();

        let tick = if sample.encoder_ticks > 0 {
            InputEvent::TuneUp
        } else {
            InputEvent::TuneDown
        };
        for _ in 0..sample.encoder_ticks.unsigned_abs() {
            if events.push(tick).is_err() {
                break;
            }
        }

        // Momentary switch: only the press edge means anything.
        if self.switch.update(sample.switch_level, now_ms) == Some(Edge::Falling) {
            let _ = events.push(InputEvent::StepCycle);
        }

        match self.ptt.update(sample.ptt_level, now_ms) {
            Some(Edge::Falling) => {
                let _ = events.push(InputEvent::PttAsserted);
            }
            Some(Edge::Rising) => {
                let _ = events.push(InputEvent::PttReleased);
            }
            None => {}
        }

        events
    }
}

impl Default for InputDebouncer {
    fn default() -> Self {
        Self::new()
    }
}
