//! Lamp state machine driving the two output channels.
//!
//! Provides [`LampStateMachine`] which owns the output hardware and the active
//! index into a [`LampCycle`]. Also defines the [`LampOutputs`] trait for
//! hardware abstraction.

use crate::cycle::LampCycle;
use crate::types::{Channel, ChannelState, LampError, LampState};

/// Trait for abstracting the two channel outputs.
///
/// Implement this for your hardware to let the state machine drive it.
pub trait LampOutputs {
    /// Drives one channel to the given logical state.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn set_channel(&mut self, channel: Channel, state: ChannelState);
}

/// Cycles a warm/cool lamp through the states of a [`LampCycle`].
///
/// The active index is always a valid row of the cycle. Outputs are only
/// written by [`start`](Self::start) and [`apply_state`](Self::apply_state).
///
/// # Type Parameters
/// * `O` - Output implementation type
/// * `N` - Maximum number of states in the cycle
pub struct LampStateMachine<O: LampOutputs, const N: usize> {
    outputs: O,
    cycle: LampCycle<N>,
    start_index: usize,
    active_index: usize,
    started: bool,
}

impl<O: LampOutputs, const N: usize> LampStateMachine<O, N> {
    /// Creates a state machine positioned at `start_index`.
    ///
    /// Outputs are left untouched until [`start`](Self::start) is called.
    ///
    /// # Errors
    /// * `StartIndexOutOfRange` - `start_index` does not address a row of `cycle`
    pub fn new(outputs: O, cycle: LampCycle<N>, start_index: usize) -> Result<Self, LampError> {
        if start_index >= cycle.len() {
            return Err(LampError::StartIndexOutOfRange {
                index: start_index,
                len: cycle.len(),
            });
        }

        Ok(Self {
            outputs,
            cycle,
            start_index,
            active_index: start_index,
            started: false,
        })
    }

    /// Applies the startup state to the outputs.
    ///
    /// Only the first call writes; later calls are no-ops. Returns true if
    /// this call applied the state.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }

        self.started = true;
        self.apply_state(self.active_index);
        true
    }

    /// Moves to the next state of the cycle, wrapping after the last one.
    ///
    /// Does not touch the outputs.
    pub fn advance(&mut self) {
        self.active_index = self.cycle.next_index(self.active_index);
    }

    /// Writes the state at `index` to the outputs, warm channel first.
    ///
    /// `index` is reduced modulo the cycle length.
    pub fn apply_state(&mut self, index: usize) {
        let state = self.cycle.wrapped(index);
        for channel in [Channel::Warm, Channel::Cool] {
            self.outputs.set_channel(channel, state.channel(channel));
        }
    }

    /// Advances and applies the new active state.
    pub fn step(&mut self) -> LampState {
        self.advance();
        self.apply_state(self.active_index);
        self.current_state()
    }

    /// Returns the active index.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Returns the index the machine started from.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Returns the active state.
    pub fn current_state(&self) -> LampState {
        self.cycle.wrapped(self.active_index)
    }

    /// Returns true once the startup state has been applied.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Returns the cycle being stepped through.
    pub fn cycle(&self) -> &LampCycle<N> {
        &self.cycle
    }

    /// Returns a reference to the outputs.
    pub fn outputs(&self) -> &O {
        &self.outputs
    }

    /// Consumes the state machine and returns the outputs.
    pub fn release(self) -> O {
        self.outputs
    }
}
