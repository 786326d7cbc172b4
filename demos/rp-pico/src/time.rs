//! Hardware timer wrapper for lamp-cycler time traits.
//!
//! The RP2040 timer counts microseconds in 64 bits, so the linear debounce
//! comparison never sees a wraparound in practice.

use fugit::{MicrosDurationU64, TimerInstantU64};
use lamp_cycler::{TimeDuration, TimeInstant, TimeSource};

/// Duration type backed by fugit microsecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration(MicrosDurationU64);

impl TimeDuration for Duration {
    const ZERO: Self = Duration(MicrosDurationU64::from_ticks(0));

    fn as_micros(&self) -> u64 {
        self.0.to_micros()
    }

    fn from_micros(micros: u64) -> Self {
        Duration(MicrosDurationU64::micros(micros))
    }
}

/// Instant type backed by fugit timer instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant(TimerInstantU64<1_000_000>);

impl Instant {
    /// Microseconds since the timer started.
    pub fn ticks(&self) -> u64 {
        self.0.ticks()
    }
}

impl TimeInstant for Instant {
    type Duration = Duration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        let ticks = self.0.ticks().saturating_sub(earlier.0.ticks());
        Duration(MicrosDurationU64::from_ticks(ticks))
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        let new_ticks = self.0.ticks().checked_add(duration.0.to_micros())?;
        Some(Instant(TimerInstantU64::from_ticks(new_ticks)))
    }
}

impl From<TimerInstantU64<1_000_000>> for Instant {
    fn from(instant: TimerInstantU64<1_000_000>) -> Self {
        Instant(instant)
    }
}

/// Time source wrapper around RP2040 Timer
pub struct HardwareTimer {
    timer: rp_pico::hal::Timer,
}

impl HardwareTimer {
    /// Create a new hardware timer wrapper
    pub fn new(timer: rp_pico::hal::Timer) -> Self {
        Self { timer }
    }
}

impl TimeSource<Instant> for HardwareTimer {
    fn now(&self) -> Instant {
        Instant(self.timer.get_counter())
    }
}
