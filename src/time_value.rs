//! The hours:minutes:seconds value kept by the clock.

use crate::types::{Delta, Field, TimeError};

/// A 24-hour time of day with wraparound arithmetic.
///
/// Fields are private so every value is in range: seconds and minutes in
/// `0..60`, hours in `0..24`. There is no day counter; hours wrap on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeValue {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl TimeValue {
    /// 00:00:00.
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Creates a time value, rejecting any field outside its bound.
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self, TimeError> {
        for (field, value) in [
            (Field::Hours, hours),
            (Field::Minutes, minutes),
            (Field::Seconds, seconds),
        ] {
            if value >= field.modulus() {
                return Err(TimeError::OutOfRange { field, value });
            }
        }

        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    #[inline]
    pub fn hours(&self) -> u8 {
        self.hours
    }

    #[inline]
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    #[inline]
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Returns the value of one field.
    #[inline]
    pub fn get(&self, field: Field) -> u8 {
        match field {
            Field::Hours => self.hours,
            Field::Minutes => self.minutes,
            Field::Seconds => self.seconds,
        }
    }

    /// Returns true iff the value is 00:00:00.
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Advances by one second, carrying into minutes and hours.
    ///
    /// 23:59:59 wraps to 00:00:00.
    pub fn increment(&mut self) {
        self.seconds += 1;
        if self.seconds == 60 {
            self.seconds = 0;
            self.minutes += 1;
            if self.minutes == 60 {
                self.minutes = 0;
                self.hours = (self.hours + 1) % 24;
            }
        }
    }

    /// Retreats by one second, borrowing from minutes and hours.
    ///
    /// Clamps at 00:00:00 instead of wrapping. Returns true if the value is
    /// 00:00:00 afterwards.
    pub fn decrement(&mut self) -> bool {
        if self.is_zero() {
            return true;
        }

        if self.seconds == 0 {
            self.seconds = 59;
            if self.minutes == 0 {
                self.minutes = 59;
                // Non-zero with mm:ss at 00:00 means hours > 0 here.
                self.hours = self.hours.saturating_sub(1);
            } else {
                self.minutes -= 1;
            }
        } else {
            self.seconds -= 1;
        }

        self.is_zero()
    }

    /// Steps a single field by one, wrapping within its bound.
    ///
    /// Never carries into the other fields: adjusting minutes from 59 up
    /// gives 00 and leaves hours alone.
    pub fn set_field(&mut self, field: Field, delta: Delta) {
        let modulus = field.modulus();
        let slot = match field {
            Field::Hours => &mut self.hours,
            Field::Minutes => &mut self.minutes,
            Field::Seconds => &mut self.seconds,
        };

        *slot = match delta {
            Delta::Up => (*slot + 1) % modulus,
            Delta::Down if *slot == 0 => modulus - 1,
            Delta::Down => *slot - 1,
        };
    }

    /// The six display digits, tens first: `[h1, h0, m1, m0, s1, s0]`.
    pub fn digits(&self) -> [u8; 6] {
        [
            self.hours / 10,
            self.hours % 10,
            self.minutes / 10,
            self.minutes % 10,
            self.seconds / 10,
            self.seconds % 10,
        ]
    }
}

impl core::fmt::Display for TimeValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TimeValue {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "{=u8:02}:{=u8:02}:{=u8:02}",
            self.hours,
            self.minutes,
            self.seconds
        )
    }
}
