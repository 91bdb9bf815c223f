//! Signal-based control for the shared engine.

use crate::types::{Adjustment, Direction};

/// Signals that can be delivered to a [`SharedEngine`](crate::SharedEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlSignal {
    /// One second elapsed.
    Tick,
    /// Reset the time value to 00:00:00.
    Reset,
    /// Stop ticking and silence the alarm.
    Pause,
    /// Start ticking again.
    Resume,
    /// Select a direction and silence the alarm.
    SetDirection(Direction),
    /// Flip the direction and silence the alarm.
    ToggleMode,
    /// Step one field. Ignored unless paused.
    Adjust(Adjustment),
}
