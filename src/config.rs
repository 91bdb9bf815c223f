//! Start-up configuration.

use crate::debounce::DEFAULT_DEBOUNCE_MS;
use crate::engine::TickEngine;
use crate::time::TimeDuration;
use crate::time_value::TimeValue;
use crate::types::{Direction, RunState};

/// Start-up settings for a clock.
///
/// Defaults match a freshly powered board: 00:00:00, counting up, running,
/// with a 1 ms debounce interval.
///
/// ```
/// # use updown_clock::{ClockConfig, Direction, RunState, TimeDuration, TimeValue};
/// # #[derive(Clone, Copy, PartialEq, Debug)]
/// # struct Millis(u64);
/// # impl TimeDuration for Millis {
/// #     const ZERO: Self = Millis(0);
/// #     fn as_millis(&self) -> u64 { self.0 }
/// #     fn from_millis(millis: u64) -> Self { Millis(millis) }
/// # }
/// let config = ClockConfig::<Millis>::default()
///     .with_direction(Direction::CountDown)
///     .with_time(TimeValue::new(0, 5, 0).unwrap())
///     .with_run_state(RunState::Paused);
///
/// let engine = config.engine();
/// assert_eq!(engine.time().minutes(), 5);
/// assert_eq!(config.debounce, Millis(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockConfig<D: TimeDuration> {
    /// How long a button level must hold before a press counts.
    pub debounce: D,
    pub direction: Direction,
    pub run_state: RunState,
    pub time: TimeValue,
}

impl<D: TimeDuration> Default for ClockConfig<D> {
    fn default() -> Self {
        Self {
            debounce: D::from_millis(DEFAULT_DEBOUNCE_MS),
            direction: Direction::CountUp,
            run_state: RunState::Running,
            time: TimeValue::ZERO,
        }
    }
}

impl<D: TimeDuration> ClockConfig<D> {
    pub fn with_debounce(mut self, debounce: D) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_run_state(mut self, run_state: RunState) -> Self {
        self.run_state = run_state;
        self
    }

    pub fn with_time(mut self, time: TimeValue) -> Self {
        self.time = time;
        self
    }

    /// Builds the engine described by this configuration.
    pub fn engine(&self) -> TickEngine {
        TickEngine::new(self.time, self.run_state, self.direction)
    }
}
