//! Shared test infrastructure for updown-clock integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use updown_clock::{ClockOutputs, TimeDuration, TimeInstant, TimeSource, TimeValue};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Outputs
// ============================================================================

/// One write to a mock output line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineWrite {
    Buzzer(bool),
    TickSource(bool),
    Indicators(bool, bool),
}

/// Mock output hardware that records every line write
pub struct MockOutputs {
    pub buzzer: bool,
    pub tick_source: bool,
    pub indicators: (bool, bool),
    history: heapless::Vec<LineWrite, 32>,
}

impl MockOutputs {
    pub fn new() -> Self {
        Self {
            buzzer: false,
            tick_source: false,
            indicators: (false, false),
            history: heapless::Vec::new(),
        }
    }

    pub fn history(&self) -> &[LineWrite] {
        &self.history
    }
}

impl ClockOutputs for MockOutputs {
    fn set_buzzer(&mut self, on: bool) {
        self.buzzer = on;
        let _ = self.history.push(LineWrite::Buzzer(on));
    }

    fn set_tick_source(&mut self, enabled: bool) {
        self.tick_source = enabled;
        let _ = self.history.push(LineWrite::TickSource(enabled));
    }

    fn set_mode_indicators(&mut self, count_up: bool, count_down: bool) {
        self.indicators = (count_up, count_down);
        let _ = self.history.push(LineWrite::Indicators(count_up, count_down));
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Shorthand for a valid time value
pub fn tv(hours: u8, minutes: u8, seconds: u8) -> TimeValue {
    TimeValue::new(hours, minutes, seconds).unwrap()
}
