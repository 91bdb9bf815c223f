//! The one-second tick state machine.
//!
//! [`TickEngine`] owns the time value, the run state and the count direction,
//! and latches the alarm line. It is plain data: the execution contexts share
//! it through [`SharedEngine`](crate::SharedEngine).

use crate::time_value::TimeValue;
use crate::types::{Adjustment, Direction, RunState};

/// What a call to [`TickEngine::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// The engine is paused; nothing changed.
    Idle,
    /// The time value moved by one second.
    Advanced,
    /// The countdown is at 00:00:00. The alarm is asserted and the engine
    /// paused itself.
    Expired,
}

/// Desired levels of the clock's output lines.
///
/// Derived from engine state; see [`TickEngine::outputs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputLines {
    /// Alarm buzzer.
    pub buzzer: bool,
    /// Enable for the hardware one-second timer.
    pub tick_source: bool,
    pub count_up_indicator: bool,
    pub count_down_indicator: bool,
}

/// Clock state: time value, run state, direction and the alarm latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickEngine {
    time: TimeValue,
    run_state: RunState,
    direction: Direction,
    alarm: bool,
    generation: u32,
}

impl Default for TickEngine {
    fn default() -> Self {
        Self::new(TimeValue::ZERO, RunState::Running, Direction::CountUp)
    }
}

impl TickEngine {
    /// Creates an engine with the alarm off.
    pub const fn new(time: TimeValue, run_state: RunState, direction: Direction) -> Self {
        Self {
            time,
            run_state,
            direction,
            alarm: false,
            generation: 0,
        }
    }

    /// Applies one elapsed second.
    ///
    /// A no-op while paused. Counting up clears the alarm. Counting down
    /// clears the alarm while the value is above zero; once the value is
    /// 00:00:00, either on entry or as a result of this decrement, the alarm
    /// is asserted and the engine pauses. It stays at zero until a control
    /// action changes that.
    pub fn tick(&mut self) -> TickOutcome {
        if self.run_state == RunState::Paused {
            return TickOutcome::Idle;
        }

        match self.direction {
            Direction::CountUp => {
                self.time.increment();
                self.alarm = false;
                TickOutcome::Advanced
            }
            Direction::CountDown => {
                if self.time.is_zero() || self.time.decrement() {
                    self.expire();
                    TickOutcome::Expired
                } else {
                    self.alarm = false;
                    TickOutcome::Advanced
                }
            }
        }
    }

    fn expire(&mut self) {
        self.alarm = true;
        self.set_run_state(RunState::Paused);

        #[cfg(feature = "defmt")]
        defmt::info!("countdown expired");
    }

    /// Sets the count direction. Leaves the time value and the alarm alone.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Sets the time value to 00:00:00 in any run state.
    pub fn reset(&mut self) {
        self.time = TimeValue::ZERO;
    }

    /// Stops ticking and silences the alarm.
    pub fn pause(&mut self) {
        self.set_run_state(RunState::Paused);
        self.alarm = false;
    }

    /// Allows ticking again.
    pub fn resume(&mut self) {
        self.set_run_state(RunState::Running);
    }

    fn set_run_state(&mut self, run_state: RunState) {
        if self.run_state != run_state {
            self.run_state = run_state;
            self.generation = self.generation.wrapping_add(1);
        }
    }

    /// Applies a manual adjustment if paused.
    ///
    /// Returns false, leaving the value untouched, while running.
    pub fn adjust(&mut self, adjustment: Adjustment) -> bool {
        if self.run_state != RunState::Paused {
            return false;
        }

        self.time.set_field(adjustment.field, adjustment.delta);
        true
    }

    /// Turns the alarm line off.
    pub fn clear_alarm(&mut self) {
        self.alarm = false;
    }

    pub fn time(&self) -> TimeValue {
        self.time
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Counts run state changes, wrapping.
    ///
    /// Lets a poller tell whether pause/resume edges happened between two of
    /// its own observations.
    pub fn run_generation(&self) -> u32 {
        self.generation
    }

    /// Returns true while the alarm line is asserted.
    pub fn alarm_active(&self) -> bool {
        self.alarm
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.run_state == RunState::Paused
    }

    /// Output line levels for the current state.
    pub fn outputs(&self) -> OutputLines {
        OutputLines {
            buzzer: self.alarm,
            tick_source: self.is_running(),
            count_up_indicator: self.direction == Direction::CountUp,
            count_down_indicator: self.direction == Direction::CountDown,
        }
    }
}
