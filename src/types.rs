//! Core types shared by the engine and the control surface.

/// One of the three fields of a [`TimeValue`](crate::TimeValue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Hours,
    Minutes,
    Seconds,
}

impl Field {
    /// Number of distinct values the field can hold (24 or 60).
    #[inline]
    pub const fn modulus(self) -> u8 {
        match self {
            Field::Hours => 24,
            Field::Minutes | Field::Seconds => 60,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Field::Hours => "hours",
            Field::Minutes => "minutes",
            Field::Seconds => "seconds",
        }
    }
}

/// Single-step change applied by a manual adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Delta {
    /// Subtract one, wrapping to the field's maximum.
    Down,
    /// Add one, wrapping to zero.
    Up,
}

/// A manual adjustment: one field, one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Adjustment {
    pub field: Field,
    pub delta: Delta,
}

impl Adjustment {
    /// Creates an adjustment.
    #[inline]
    pub const fn new(field: Field, delta: Delta) -> Self {
        Self { field, delta }
    }
}

/// The six adjustment buttons, in wiring order.
pub const ADJUSTMENTS: [Adjustment; 6] = [
    Adjustment::new(Field::Hours, Delta::Down),
    Adjustment::new(Field::Hours, Delta::Up),
    Adjustment::new(Field::Minutes, Delta::Down),
    Adjustment::new(Field::Minutes, Delta::Up),
    Adjustment::new(Field::Seconds, Delta::Down),
    Adjustment::new(Field::Seconds, Delta::Up),
];

/// Count direction applied on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    #[default]
    CountUp,
    /// Counts toward 00:00:00 and stops there with the alarm asserted.
    CountDown,
}

impl Direction {
    /// Returns the other direction.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Direction::CountUp => Direction::CountDown,
            Direction::CountDown => Direction::CountUp,
        }
    }
}

/// Whether the periodic tick is allowed to advance the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunState {
    #[default]
    Running,
    /// Ticks are ignored and manual adjustment is allowed.
    Paused,
}

/// Errors from constructing a time value out of raw integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// A field value is at or above its modulus.
    OutOfRange { field: Field, value: u8 },
}

impl core::fmt::Display for TimeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimeError::OutOfRange { field, value } => {
                write!(
                    f,
                    "{} value {} out of range (must be below {})",
                    field.name(),
                    value,
                    field.modulus()
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimeError {}
