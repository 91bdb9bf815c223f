//! The polled control surface: mode button, adjustment buttons, and the
//! forwarding of reset/pause/resume edges.

use heapless::Vec;

use crate::config::ClockConfig;
use crate::debounce::{DebounceState, DebouncedButton};
use crate::engine::OutputLines;
use crate::shared::SharedEngine;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{ADJUSTMENTS, Adjustment, Direction, RunState};

/// Most events one poll can report: a mode toggle plus every adjustment.
pub const MAX_POLL_EVENTS: usize = ADJUSTMENTS.len() + 1;

/// Asserted levels of the polled buttons, polarity already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputLevels {
    pub mode: bool,
    /// In [`ADJUSTMENTS`] order: hours-, hours+, minutes-, minutes+, seconds-, seconds+.
    pub adjust: [bool; 6],
}

/// Something a poll changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlEvent {
    /// The mode button flipped the direction to the contained value.
    ModeToggled(Direction),
    /// An adjustment button stepped a field.
    Adjusted(Adjustment),
}

/// Result of one [`ControlSurface::poll`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollReport {
    /// Events in the order they were applied.
    pub events: Vec<ControlEvent, MAX_POLL_EVENTS>,
    /// Output lines after the poll.
    pub outputs: OutputLines,
}

/// Turns button samples and control edges into engine updates.
///
/// Owns one [`DebouncedButton`] per polled button and borrows the shared
/// engine; it keeps no time data of its own.
///
/// Adjustment presses only count when they start and confirm while the
/// engine is paused. The surface remembers the engine's run generation from
/// its last poll, so a pause/resume cycle between two polls cannot leave a
/// half-debounced press behind.
///
/// # Type Parameters
/// * `'a` - Lifetime of the engine and time source references
/// * `I` - Time instant type
/// * `T` - Time source implementation type
pub struct ControlSurface<'a, I: TimeInstant, T: TimeSource<I>> {
    engine: &'a SharedEngine,
    time_source: &'a T,
    mode_button: DebouncedButton<I>,
    adjust_buttons: [DebouncedButton<I>; 6],
    seen_generation: u32,
}

impl<'a, I: TimeInstant, T: TimeSource<I>> ControlSurface<'a, I, T> {
    /// Creates a control surface whose buttons all use `debounce`.
    pub fn new(engine: &'a SharedEngine, time_source: &'a T, debounce: I::Duration) -> Self {
        Self {
            engine,
            time_source,
            mode_button: DebouncedButton::new(debounce),
            adjust_buttons: core::array::from_fn(|_| DebouncedButton::new(debounce)),
            seen_generation: engine.run_status().1,
        }
    }

    /// Creates a control surface using the configured debounce interval.
    pub fn from_config(
        engine: &'a SharedEngine,
        time_source: &'a T,
        config: &ClockConfig<I::Duration>,
    ) -> Self {
        Self::new(engine, time_source, config.debounce)
    }

    /// Samples every polled button once.
    ///
    /// The mode button is always evaluated. The six adjustment buttons only
    /// confirm presses while the engine is paused. While it runs they just
    /// track the level, and a button still held when the engine pauses must
    /// be released before it can step its field. A button caught mid-press
    /// by a run state change between two polls is treated the same way. An
    /// adjustment press that races a resume is dropped.
    pub fn poll(&mut self, levels: &InputLevels) -> PollReport {
        let now = self.time_source.now();
        let mut events = Vec::new();

        if self.mode_button.poll(levels.mode, now) {
            let (direction, _) = self.engine.toggle_direction();
            let _ = events.push(ControlEvent::ModeToggled(direction));
        }

        let (run_state, generation) = self.engine.run_status();
        let run_state_changed = generation != self.seen_generation;
        self.seen_generation = generation;

        let inputs = levels.adjust.iter().zip(ADJUSTMENTS);
        for (button, (&asserted, adjustment)) in self.adjust_buttons.iter_mut().zip(inputs) {
            let stale = run_state_changed && !matches!(button.state(), DebounceState::Idle);
            if run_state == RunState::Running || stale {
                button.suppress(asserted);
                continue;
            }

            if button.poll(asserted, now) && self.engine.adjust(adjustment) {
                #[cfg(feature = "defmt")]
                defmt::debug!("adjusted {}", adjustment);

                let _ = events.push(ControlEvent::Adjusted(adjustment));
            }
        }

        PollReport {
            events,
            outputs: self.engine.outputs(),
        }
    }

    /// Reset edge. Applies in any run state; not debounced.
    pub fn on_reset(&self) -> OutputLines {
        self.engine.reset()
    }

    /// Pause edge. The returned lines disable the tick source; not debounced.
    pub fn on_pause(&self) -> OutputLines {
        self.engine.pause()
    }

    /// Resume edge. The returned lines enable the tick source; not debounced.
    pub fn on_resume(&self) -> OutputLines {
        self.engine.resume()
    }

    /// Selects a direction directly, silencing the alarm like the mode button.
    pub fn set_direction(&self, direction: Direction) -> OutputLines {
        self.engine.select_direction(direction)
    }

    pub fn engine(&self) -> &'a SharedEngine {
        self.engine
    }

    pub fn mode_button(&self) -> &DebouncedButton<I> {
        &self.mode_button
    }

    /// The adjustment buttons, in [`ADJUSTMENTS`] order.
    pub fn adjust_buttons(&self) -> &[DebouncedButton<I>; 6] {
        &self.adjust_buttons
    }
}
