//! Memory calculator for updown-clock
//!
//! Reports the RAM footprint of the clock's state and control types for the
//! instant types commonly used on microcontrollers.
//!
//! Usage:
//!   cd tools/sizeof-calculator
//!   cargo run --release
//!   cat report.md

use embassy_time::Duration as EmbassyDurationInner;
use embassy_time::Instant as EmbassyInstantInner;
use std::fs::File;
use std::io::Write;
use std::mem::size_of;
use updown_clock::{
    ControlSurface, DebouncedButton, OutputLines, SharedEngine, TickEngine, TimeDuration,
    TimeInstant, TimeSource, TimeValue,
};

// ============================================================================
// Duration / Instant Types
// ============================================================================

// u32 milliseconds (SysTick counter)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Duration32(u32);

impl TimeDuration for Duration32 {
    const ZERO: Self = Duration32(0);

    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        Duration32(millis as u32)
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Instant32(u32);

impl TimeInstant for Instant32 {
    type Duration = Duration32;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Duration32(self.0.wrapping_sub(earlier.0))
    }
}

struct TimeSource32;

impl TimeSource<Instant32> for TimeSource32 {
    fn now(&self) -> Instant32 {
        Instant32(0)
    }
}

// Embassy wrappers
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct EmbassyDuration(EmbassyDurationInner);

impl TimeDuration for EmbassyDuration {
    const ZERO: Self = EmbassyDuration(EmbassyDurationInner::from_ticks(0));

    fn as_millis(&self) -> u64 {
        self.0.as_millis()
    }

    fn from_millis(millis: u64) -> Self {
        EmbassyDuration(EmbassyDurationInner::from_millis(millis))
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct EmbassyInstant(EmbassyInstantInner);

impl TimeInstant for EmbassyInstant {
    type Duration = EmbassyDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        EmbassyDuration(self.0 - earlier.0)
    }
}

#[allow(dead_code)]
struct EmbassyTimeSource;

impl TimeSource<EmbassyInstant> for EmbassyTimeSource {
    fn now(&self) -> EmbassyInstant {
        EmbassyInstant(EmbassyInstantInner::from_ticks(0))
    }
}

// ============================================================================
// Report
// ============================================================================

fn write_header(f: &mut File) -> std::io::Result<()> {
    writeln!(f, "# updown-clock Memory Footprint Analysis")?;
    writeln!(f)?;
    writeln!(
        f,
        "**Generated:** {}  ",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(
        f,
        "**Architecture:** {}-bit host",
        std::mem::size_of::<usize>() * 8
    )?;
    writeln!(f)?;
    Ok(())
}

fn write_core_sizes(f: &mut File) -> std::io::Result<()> {
    writeln!(f, "## Core State")?;
    writeln!(f)?;
    writeln!(f, "| Type | Size |")?;
    writeln!(f, "|------|------|")?;
    writeln!(f, "| `TimeValue` | {} B |", size_of::<TimeValue>())?;
    writeln!(f, "| `TickEngine` | {} B |", size_of::<TickEngine>())?;
    writeln!(f, "| `SharedEngine` | {} B |", size_of::<SharedEngine>())?;
    writeln!(f, "| `OutputLines` | {} B |", size_of::<OutputLines>())?;
    writeln!(f)?;
    Ok(())
}

fn write_control_row<I: TimeInstant, T: TimeSource<I>>(
    f: &mut File,
    label: &str,
) -> std::io::Result<()> {
    writeln!(
        f,
        "| {} | {} B | {} B |",
        label,
        size_of::<DebouncedButton<I>>(),
        size_of::<ControlSurface<'static, I, T>>()
    )
}

fn write_control_sizes(f: &mut File) -> std::io::Result<()> {
    writeln!(f, "## Control Surface")?;
    writeln!(f)?;
    writeln!(
        f,
        "The control surface holds seven debounced buttons plus two references."
    )?;
    writeln!(f)?;
    writeln!(f, "| Instant | `DebouncedButton` | `ControlSurface` |")?;
    writeln!(f, "|---------|-------------------|------------------|")?;
    write_control_row::<Instant32, TimeSource32>(f, "u32")?;
    write_control_row::<EmbassyInstant, EmbassyTimeSource>(f, "Embassy")?;
    writeln!(f)?;
    Ok(())
}

fn main() -> std::io::Result<()> {
    let report_path = "report.md";
    let mut file = File::create(report_path)?;

    write_header(&mut file)?;
    write_core_sizes(&mut file)?;
    write_control_sizes(&mut file)?;

    // Sanity check that the reported engine actually runs on this host.
    let engine = SharedEngine::default();
    engine.tick();
    writeln!(&mut file, "## Architecture Note")?;
    writeln!(&mut file)?;
    writeln!(
        &mut file,
        "Analysis performed on {}-bit host architecture. Embedded 32-bit targets will have smaller `ControlSurface` sizes due to pointer differences (4B vs 8B). Engine after one tick: {}.",
        std::mem::size_of::<usize>() * 8,
        engine.snapshot()
    )?;

    println!("✓ Report generated: {}", report_path);
    println!("  View with: cat {}", report_path);

    Ok(())
}
