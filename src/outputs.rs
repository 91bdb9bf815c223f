//! Hardware abstraction for the clock's output lines.

use crate::engine::OutputLines;

/// Trait for abstracting the clock's output hardware.
///
/// Implement this for your pins and timer peripheral. Handle any hardware
/// errors internally - these methods cannot fail.
pub trait ClockOutputs {
    /// Drives the alarm buzzer line.
    fn set_buzzer(&mut self, on: bool);

    /// Enables or disables the one-second timer that produces ticks.
    fn set_tick_source(&mut self, enabled: bool);

    /// Drives the pair of mode indicator lines.
    fn set_mode_indicators(&mut self, count_up: bool, count_down: bool);
}

/// Applies [`OutputLines`] to a [`ClockOutputs`], touching only lines that changed.
pub struct OutputDriver<O: ClockOutputs> {
    outputs: O,
    current: Option<OutputLines>,
}

impl<O: ClockOutputs> OutputDriver<O> {
    /// Creates a driver. The first [`apply`](Self::apply) writes every line.
    pub fn new(outputs: O) -> Self {
        Self {
            outputs,
            current: None,
        }
    }

    /// Drives the hardware to `lines`.
    pub fn apply(&mut self, lines: OutputLines) {
        let previous = self.current;

        if previous.map(|p| p.buzzer) != Some(lines.buzzer) {
            self.outputs.set_buzzer(lines.buzzer);
        }

        if previous.map(|p| p.tick_source) != Some(lines.tick_source) {
            self.outputs.set_tick_source(lines.tick_source);
        }

        let indicators = (lines.count_up_indicator, lines.count_down_indicator);
        if previous.map(|p| (p.count_up_indicator, p.count_down_indicator)) != Some(indicators) {
            self.outputs.set_mode_indicators(indicators.0, indicators.1);
        }

        self.current = Some(lines);
    }

    /// The lines last applied, if any.
    pub fn current(&self) -> Option<OutputLines> {
        self.current
    }

    pub fn outputs(&self) -> &O {
        &self.outputs
    }

    pub fn outputs_mut(&mut self) -> &mut O {
        &mut self.outputs
    }

    /// Releases the hardware.
    pub fn into_inner(self) -> O {
        self.outputs
    }
}
