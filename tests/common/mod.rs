//! Shared test infrastructure for lamp-cycler integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, OutputPin};
use lamp_cycler::{Channel, ChannelState, LampOutputs, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps microseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_micros(&self) -> u64 {
        self.0
    }

    fn from_micros(micros: u64) -> Self {
        TestDuration(micros)
    }
}

/// Mock instant type for testing (microseconds since boot)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(TestInstant)
    }
}

// ============================================================================
// Mock Outputs
// ============================================================================

/// Mock outputs that record every channel write
pub struct MockOutputs {
    warm: Option<ChannelState>,
    cool: Option<ChannelState>,
    writes: heapless::Vec<(Channel, ChannelState), 64>,
}

impl MockOutputs {
    pub fn new() -> Self {
        Self {
            warm: None,
            cool: None,
            writes: heapless::Vec::new(),
        }
    }

    /// Last written (warm, cool) states, `None` for a channel never written
    pub fn levels(&self) -> (Option<ChannelState>, Option<ChannelState>) {
        (self.warm, self.cool)
    }

    pub fn writes(&self) -> &[(Channel, ChannelState)] {
        &self.writes
    }
}

impl LampOutputs for MockOutputs {
    fn set_channel(&mut self, channel: Channel, state: ChannelState) {
        match channel {
            Channel::Warm => self.warm = Some(state),
            Channel::Cool => self.cool = Some(state),
        }
        let _ = self.writes.push((channel, state));
    }
}

// ============================================================================
// Mock Output Pin
// ============================================================================

/// Mock `embedded-hal` output pin recording its level history
pub struct MockPin {
    high: Option<bool>,
    history: heapless::Vec<bool, 32>,
}

impl MockPin {
    pub fn new() -> Self {
        Self {
            high: None,
            history: heapless::Vec::new(),
        }
    }

    /// `Some(true)` if driven high, `None` if never driven
    pub fn is_high(&self) -> Option<bool> {
        self.high
    }

    pub fn history(&self) -> &[bool] {
        &self.history
    }

    fn drive(&mut self, high: bool) {
        self.high = Some(high);
        let _ = self.history.push(high);
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true);
        Ok(())
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

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub const ON: ChannelState = ChannelState::On;
pub const OFF: ChannelState = ChannelState::Off;

/// Both channels as last written to the outputs
pub fn lit(outputs: &MockOutputs) -> (ChannelState, ChannelState) {
    match outputs.levels() {
        (Some(warm), Some(cool)) => (warm, cool),
        other => panic!("outputs not fully written: {:?}", other),
    }
}
