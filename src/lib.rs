#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TimeValue`**: hours:minutes:seconds with carry/borrow arithmetic and single-field adjustment
//! - **`DebouncedButton`**: turns a sampled, bouncing level into one confirmed press per physical press
//! - **`TickEngine`**: time value, run state, direction and alarm latch; defines the one-second tick
//! - **`SharedEngine`**: the engine behind a critical-section mutex, shared by the tick interrupt and the polling loop
//! - **`ControlSurface`**: mode and adjustment buttons, plus reset/pause/resume edge handlers
//! - **`ClockOutputs`**: trait to implement for your buzzer, timer and indicator hardware
//! - **`TimeSource`**: trait to implement for your timing system
//! - **`ControlSignal`**: signals that can be dispatched to the shared engine
//! - **`ClockConfig`**: start-up settings

pub mod time;
pub mod types;
pub mod time_value;
pub mod debounce;
pub mod engine;
pub mod shared;
pub mod outputs;
pub mod command;
pub mod config;
pub mod control;

pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{ADJUSTMENTS, Adjustment, Delta, Direction, Field, RunState, TimeError};
pub use time_value::TimeValue;
pub use debounce::{DEFAULT_DEBOUNCE_MS, DebounceState, DebouncedButton};
pub use engine::{OutputLines, TickEngine, TickOutcome};
pub use shared::SharedEngine;
pub use outputs::{ClockOutputs, OutputDriver};
pub use command::ControlSignal;
pub use config::ClockConfig;
pub use control::{ControlEvent, ControlSurface, InputLevels, MAX_POLL_EVENTS, PollReport};

/// Seconds in one full day; the count-up cycle length.
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;
