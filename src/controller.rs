//! Lamp controller combining the state machine with the debounced trigger.
//!
//! [`LampController`] is the single object the platform's interrupt handler
//! owns. Each [`EdgeEvent`] is filtered by the trigger; accepted edges advance
//! the lamp and push the new state to the outputs.

use crate::cycle::LampCycle;
use crate::event::EdgeEvent;
use crate::lamp::{LampOutputs, LampStateMachine};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::trigger::{DebouncedTrigger, TriggerOutcome, TriggerStats};
use crate::types::{Edge, LampError, LampState, SourceId};
use crate::{
    BUTTON_PIN_VARIANT_A, BUTTON_PIN_VARIANT_B, DEBOUNCE_WINDOW_MICROS, START_INDEX_COOL,
    START_INDEX_OFF,
};

/// Wiring and behaviour parameters of a lamp.
///
/// # Type Parameters
/// * `D` - Duration type of the debounce window
/// * `N` - Maximum number of states in the cycle
#[derive(Debug, Clone)]
pub struct LampConfig<D: TimeDuration, const N: usize> {
    /// States to cycle through.
    pub cycle: LampCycle<N>,

    /// Index of the state applied at startup.
    pub start_index: usize,

    /// Input the button is wired to.
    pub button: SourceId,

    /// Edge direction that counts as a press.
    pub edge: Edge,

    /// Minimum spacing between accepted presses.
    pub debounce: D,
}

impl<D: TimeDuration, const N: usize> LampConfig<D, N> {
    /// Standard cycle starting dark, pressing on the rising edge.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `N` cannot hold the standard cycle
    pub fn new(button: impl Into<SourceId>, debounce: D) -> Result<Self, LampError> {
        Ok(Self {
            cycle: LampCycle::standard()?,
            start_index: START_INDEX_OFF,
            button: button.into(),
            edge: Edge::Rising,
            debounce,
        })
    }

    /// Button on GPIO27, starting dark.
    pub fn variant_a() -> Result<Self, LampError> {
        Self::new(BUTTON_PIN_VARIANT_A, D::from_micros(DEBOUNCE_WINDOW_MICROS))
    }

    /// Button on GPIO28, starting with the cool channel only.
    pub fn variant_b() -> Result<Self, LampError> {
        Ok(Self::new(BUTTON_PIN_VARIANT_B, D::from_micros(DEBOUNCE_WINDOW_MICROS))?
            .with_start_index(START_INDEX_COOL))
    }

    /// Replaces the cycle.
    pub fn with_cycle(mut self, cycle: LampCycle<N>) -> Self {
        self.cycle = cycle;
        self
    }

    /// Sets the startup index.
    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    /// Sets the edge direction that counts as a press.
    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edge = edge;
        self
    }

    /// Sets the debounce window.
    pub fn with_debounce(mut self, debounce: D) -> Self {
        self.debounce = debounce;
        self
    }

    /// Checks that the configuration can drive a lamp.
    ///
    /// # Errors
    /// * `StartIndexOutOfRange` - The startup index is not a row of the cycle
    pub fn validate(&self) -> Result<(), LampError> {
        if self.start_index >= self.cycle.len() {
            return Err(LampError::StartIndexOutOfRange {
                index: self.start_index,
                len: self.cycle.len(),
            });
        }
        Ok(())
    }
}

/// Drives a warm/cool lamp from debounced button edges.
///
/// # Type Parameters
/// * `I` - Time instant type
/// * `O` - Output implementation type
/// * `N` - Maximum number of states in the cycle
pub struct LampController<I: TimeInstant, O: LampOutputs, const N: usize> {
    lamp: LampStateMachine<O, N>,
    trigger: DebouncedTrigger<I>,
}

impl<I: TimeInstant, O: LampOutputs, const N: usize> LampController<I, O, N> {
    /// Creates a controller. Outputs are not written until the first
    /// [`start`](Self::start) or edge.
    ///
    /// # Errors
    /// * `StartIndexOutOfRange` - The startup index is not a row of the cycle
    pub fn new(outputs: O, config: LampConfig<I::Duration, N>) -> Result<Self, LampError> {
        config.validate()?;

        let LampConfig {
            cycle,
            start_index,
            button,
            edge,
            debounce,
        } = config;

        Ok(Self {
            lamp: LampStateMachine::new(outputs, cycle, start_index)?,
            trigger: DebouncedTrigger::new(button, edge, debounce),
        })
    }

    /// Applies the startup state. Only the first call writes the outputs.
    pub fn start(&mut self) -> bool {
        self.lamp.start()
    }

    /// Handles an edge delivered by the interrupt handler.
    ///
    /// Only an accepted edge touches the lamp. If the startup state has not
    /// been applied yet, it is applied before advancing.
    pub fn on_edge(&mut self, event: EdgeEvent<I>) -> TriggerOutcome {
        let outcome = self.trigger.on_edge(&event);
        if outcome.is_accepted() {
            self.lamp.start();
            self.lamp.step();
        }
        outcome
    }

    /// Handles an edge timestamped with the current time of `time_source`.
    pub fn on_edge_now<T: TimeSource<I>>(
        &mut self,
        source: impl Into<SourceId>,
        edge: Edge,
        time_source: &T,
    ) -> TriggerOutcome {
        self.on_edge(EdgeEvent::new(source, edge, time_source.now()))
    }

    /// Returns the active index.
    pub fn active_index(&self) -> usize {
        self.lamp.active_index()
    }

    /// Returns the active state.
    pub fn current_state(&self) -> LampState {
        self.lamp.current_state()
    }

    /// Returns the timestamp of the last accepted edge.
    pub fn last_trigger(&self) -> Option<I> {
        self.trigger.last_accepted()
    }

    /// Returns edge handling counters.
    pub fn stats(&self) -> TriggerStats {
        self.trigger.stats()
    }

    /// Returns the state machine.
    pub fn lamp(&self) -> &LampStateMachine<O, N> {
        &self.lamp
    }

    /// Returns the trigger source.
    pub fn trigger(&self) -> &DebouncedTrigger<I> {
        &self.trigger
    }

    /// Returns a reference to the outputs.
    pub fn outputs(&self) -> &O {
        self.lamp.outputs()
    }

    /// Consumes the controller and returns the outputs.
    pub fn release(self) -> O {
        self.lamp.release()
    }
}

/// Controller for the four-state reference cycle.
pub type StandardLampController<I, O> = LampController<I, O, 4>;

/// Configuration for the four-state reference cycle.
pub type StandardLampConfig<D> = LampConfig<D, 4>;
