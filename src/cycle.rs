use crate::types::{LampError, LampState};
use heapless::Vec;

/// The ordered table of illumination states a lamp steps through.
///
/// The lamp advances through the rows one at a time and wraps back to the
/// first row after the last. A cycle always holds at least one state.
///
/// # Type Parameters
/// * `N` - Maximum number of states this cycle can hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LampCycle<const N: usize> {
    states: Vec<LampState, N>,
}

impl<const N: usize> LampCycle<N> {
    /// Creates a new cycle builder.
    pub fn builder() -> CycleBuilder<N> {
        CycleBuilder::new()
    }

    /// The reference four-state table: off, both, cool only, warm only.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `N` is smaller than four
    pub fn standard() -> Result<Self, LampError> {
        Self::builder()
            .state(LampState::OFF)?
            .state(LampState::BOTH)?
            .state(LampState::COOL)?
            .state(LampState::WARM)?
            .build()
    }

    /// Returns the number of states in this cycle.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false; an empty cycle cannot be built.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the state at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&LampState> {
        self.states.get(index)
    }

    /// Returns the state at `index` reduced modulo the cycle length.
    pub fn wrapped(&self, index: usize) -> LampState {
        self.states[index % self.states.len()]
    }

    /// Returns the index that follows `index`.
    pub fn next_index(&self, index: usize) -> usize {
        (index % self.states.len() + 1) % self.states.len()
    }

    /// Returns all states in order.
    pub fn states(&self) -> &[LampState] {
        &self.states
    }
}

/// Builder for constructing validated lamp cycles.
#[derive(Debug)]
pub struct CycleBuilder<const N: usize> {
    states: Vec<LampState, N>,
}

impl<const N: usize> CycleBuilder<N> {
    /// Creates a new empty cycle builder.
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Appends a state to the cycle.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The cycle already holds `N` states
    pub fn state(mut self, state: LampState) -> Result<Self, LampError> {
        self.states
            .push(state)
            .map_err(|_| LampError::CapacityExceeded)?;
        Ok(self)
    }

    /// Builds and validates the cycle.
    ///
    /// # Errors
    /// * `EmptyCycle` - No states were added
    pub fn build(self) -> Result<LampCycle<N>, LampError> {
        if self.states.is_empty() {
            return Err(LampError::EmptyCycle);
        }

        Ok(LampCycle {
            states: self.states,
        })
    }
}

impl<const N: usize> Default for CycleBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
