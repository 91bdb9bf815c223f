//! The engine as shared between the tick context and the polling loop.
//!
//! Provides [`SharedEngine`], a [`TickEngine`] behind a
//! `critical_section::Mutex`. The tick interrupt and the reset/pause/resume
//! edge handlers call into it asynchronously; the polling loop calls into it
//! for mode and adjustment presses. Every entry point runs in a single
//! critical section and does a bounded amount of work, so a reset or
//! pause/resume edge that lands between two ticks is always visible to the
//! next tick.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::command::ControlSignal;
use crate::engine::{OutputLines, TickEngine, TickOutcome};
use crate::time_value::TimeValue;
use crate::types::{Adjustment, Direction, RunState};

/// A [`TickEngine`] that can be placed in a `static` and used from any context.
///
/// ```
/// use updown_clock::{Direction, RunState, SharedEngine, TickEngine, TimeValue};
///
/// static CLOCK: SharedEngine =
///     SharedEngine::new(TickEngine::new(TimeValue::ZERO, RunState::Running, Direction::CountUp));
/// ```
pub struct SharedEngine {
    inner: Mutex<RefCell<TickEngine>>,
}

impl SharedEngine {
    /// Wraps an engine.
    pub const fn new(engine: TickEngine) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(engine)),
        }
    }

    /// Runs `f` with exclusive access to the engine inside a critical section.
    ///
    /// Keep `f` short: interrupts are held off while it runs.
    pub fn with<R>(&self, f: impl FnOnce(&mut TickEngine) -> R) -> R {
        critical_section::with(|cs| {
            let mut engine = self.inner.borrow_ref_mut(cs);
            f(&mut *engine)
        })
    }

    /// Handles a signal by dispatching to the matching method.
    ///
    /// Returns the output lines as they stand after the signal.
    pub fn handle_signal(&self, signal: ControlSignal) -> OutputLines {
        match signal {
            ControlSignal::Tick => self.with(|engine| {
                engine.tick();
                engine.outputs()
            }),
            ControlSignal::Reset => self.reset(),
            ControlSignal::Pause => self.pause(),
            ControlSignal::Resume => self.resume(),
            ControlSignal::SetDirection(direction) => self.select_direction(direction),
            ControlSignal::ToggleMode => self.toggle_direction().1,
            ControlSignal::Adjust(adjustment) => self.with(|engine| {
                engine.adjust(adjustment);
                engine.outputs()
            }),
        }
    }

    /// Applies one elapsed second. See [`TickEngine::tick`].
    pub fn tick(&self) -> TickOutcome {
        self.with(|engine| engine.tick())
    }

    /// Resets the time value to 00:00:00 without touching run state or direction.
    pub fn reset(&self) -> OutputLines {
        self.with(|engine| {
            engine.reset();

            #[cfg(feature = "defmt")]
            defmt::debug!("reset, run state {}", engine.run_state());

            engine.outputs()
        })
    }

    /// Pauses and silences the alarm. The returned lines disable the tick source.
    pub fn pause(&self) -> OutputLines {
        self.with(|engine| {
            engine.pause();

            #[cfg(feature = "defmt")]
            defmt::debug!("paused at {}", engine.time());

            engine.outputs()
        })
    }

    /// Resumes. The returned lines enable the tick source.
    pub fn resume(&self) -> OutputLines {
        self.with(|engine| {
            engine.resume();

            #[cfg(feature = "defmt")]
            defmt::debug!("resumed at {}", engine.time());

            engine.outputs()
        })
    }

    /// Sets the direction and silences the alarm, as the mode control does.
    pub fn select_direction(&self, direction: Direction) -> OutputLines {
        self.with(|engine| {
            engine.set_direction(direction);
            engine.clear_alarm();
            engine.outputs()
        })
    }

    /// Flips the direction and silences the alarm.
    ///
    /// Returns the new direction with the resulting lines.
    pub fn toggle_direction(&self) -> (Direction, OutputLines) {
        self.with(|engine| {
            let direction = engine.direction().toggled();
            engine.set_direction(direction);
            engine.clear_alarm();

            #[cfg(feature = "defmt")]
            defmt::debug!("mode {}", direction);

            (direction, engine.outputs())
        })
    }

    /// Applies a manual adjustment if the engine is paused at the moment of
    /// the call. Returns whether it was applied.
    pub fn adjust(&self, adjustment: Adjustment) -> bool {
        self.with(|engine| engine.adjust(adjustment))
    }

    /// A consistent copy of the time value.
    pub fn snapshot(&self) -> TimeValue {
        self.with(|engine| engine.time())
    }

    pub fn run_state(&self) -> RunState {
        self.with(|engine| engine.run_state())
    }

    pub fn is_paused(&self) -> bool {
        self.with(|engine| engine.is_paused())
    }

    /// Run state and run generation, read together.
    pub fn run_status(&self) -> (RunState, u32) {
        self.with(|engine| (engine.run_state(), engine.run_generation()))
    }

    pub fn direction(&self) -> Direction {
        self.with(|engine| engine.direction())
    }

    pub fn alarm_active(&self) -> bool {
        self.with(|engine| engine.alarm_active())
    }

    pub fn outputs(&self) -> OutputLines {
        self.with(|engine| engine.outputs())
    }
}

impl Default for SharedEngine {
    fn default() -> Self {
        Self::new(TickEngine::default())
    }
}
