//! Debounced press detection for polled buttons.
//!
//! Provides [`DebouncedButton`], which turns a noisy sampled level into at
//! most one confirmed press per physical press-release cycle.

use crate::time::{TimeDuration, TimeInstant};

/// Default debounce interval in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 1;

/// The state of a [`DebouncedButton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState<I> {
    /// Level not asserted.
    Idle,
    /// Level first seen asserted at the contained instant; not yet trusted.
    Candidate(I),
    /// Press confirmed and not yet taken by the caller.
    Confirmed,
    /// Press already reported; waiting for the level to deassert.
    HeldWait,
}

/// A press detector for one physical button.
///
/// Feed it the asserted level (polarity already applied) with [`sample`] at
/// any cadence, then collect presses with [`take_press`], or do both with
/// [`poll`].
///
/// `HeldWait` replaces the firmware's spin-until-released loop: a held button
/// keeps the detector parked there, so it never reports a repeat, but the
/// caller's loop keeps running instead of blocking on the pin.
///
/// [`sample`]: DebouncedButton::sample
/// [`take_press`]: DebouncedButton::take_press
/// [`poll`]: DebouncedButton::poll
#[derive(Debug, Clone, Copy)]
pub struct DebouncedButton<I: TimeInstant> {
    state: DebounceState<I>,
    interval: I::Duration,
}

impl<I: TimeInstant> DebouncedButton<I> {
    /// Creates an idle button that confirms a press once the level has been
    /// asserted for `interval`.
    pub fn new(interval: I::Duration) -> Self {
        Self {
            state: DebounceState::Idle,
            interval,
        }
    }

    /// Updates the state machine with one sample of the input level.
    ///
    /// O(1); never waits on the pin.
    pub fn sample(&mut self, asserted: bool, now: I) {
        self.state = match (self.state, asserted) {
            (DebounceState::Idle, true) => {
                if self.interval.as_millis() == 0 {
                    DebounceState::Confirmed
                } else {
                    DebounceState::Candidate(now)
                }
            }
            (DebounceState::Idle, false) => DebounceState::Idle,
            (DebounceState::Candidate(since), true) => {
                if now.duration_since(since).as_millis() >= self.interval.as_millis() {
                    DebounceState::Confirmed
                } else {
                    DebounceState::Candidate(since)
                }
            }
            // Bounced back before the interval elapsed.
            (DebounceState::Candidate(_), false) => DebounceState::Idle,
            // A confirmed press stays pending even if released before it is taken.
            (DebounceState::Confirmed, _) => DebounceState::Confirmed,
            (DebounceState::HeldWait, true) => DebounceState::HeldWait,
            (DebounceState::HeldWait, false) => DebounceState::Idle,
        };
    }

    /// Returns true once per confirmed press, moving to `HeldWait`.
    pub fn take_press(&mut self) -> bool {
        if matches!(self.state, DebounceState::Confirmed) {
            self.state = DebounceState::HeldWait;
            true
        } else {
            false
        }
    }

    /// Drops any pending or candidate press and returns to `Idle`.
    pub fn reset(&mut self) {
        self.state = DebounceState::Idle;
    }

    /// Tracks the level without ever confirming a press.
    ///
    /// An asserted level parks the button in `HeldWait`, so a press that
    /// starts while suppressed must be released before it can count.
    pub fn suppress(&mut self, asserted: bool) {
        self.state = if asserted {
            DebounceState::HeldWait
        } else {
            DebounceState::Idle
        };
    }

    /// Samples the level and takes any confirmed press.
    #[inline]
    pub fn poll(&mut self, asserted: bool, now: I) -> bool {
        self.sample(asserted, now);
        self.take_press()
    }

    /// Returns the current state.
    pub fn state(&self) -> DebounceState<I> {
        self.state
    }

    /// Returns the debounce interval.
    pub fn interval(&self) -> I::Duration {
        self.interval
    }
}
