#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`LampState`**: Warm and cool channel states for one row of the table
//! - **`LampCycle`**: The ordered table of states a lamp steps through
//! - **`LampStateMachine`**: Holds the active index and writes states to the outputs
//! - **`LampOutputs`**: Trait to implement for your channel hardware
//! - **`GpioChannels`**: `LampOutputs` over two `embedded-hal` output pins
//! - **`DebouncedTrigger`**: Filters button edges by source, direction and debounce window
//! - **`EdgeEvent`**: Payload handed from the interrupt handler to the controller
//! - **`LampController`**: Owns both components; what the interrupt handler calls
//! - **`TimeSource`**: Trait to implement for your timing system

pub mod time;
pub mod types;
pub mod cycle;
pub mod event;
pub mod lamp;
pub mod trigger;
pub mod controller;
pub mod gpio;

pub use cycle::{CycleBuilder, LampCycle};
pub use types::{Channel, ChannelState, Edge, LampError, LampState, SourceId};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use event::EdgeEvent;
pub use lamp::{LampOutputs, LampStateMachine};
pub use trigger::{DebouncedTrigger, TriggerOutcome, TriggerStats};
pub use controller::{LampConfig, LampController, StandardLampConfig, StandardLampController};
pub use gpio::{GpioChannels, Polarity};

/// GPIO driving the warm channel in the reference wiring.
pub const WARM_PIN: u8 = 19;

/// GPIO driving the cool channel in the reference wiring.
pub const COOL_PIN: u8 = 18;

/// Button input of the variant that starts dark.
pub const BUTTON_PIN_VARIANT_A: u8 = 27;

/// Button input of the variant that starts with the cool channel.
pub const BUTTON_PIN_VARIANT_B: u8 = 28;

/// Minimum spacing between accepted presses.
pub const DEBOUNCE_WINDOW_MICROS: u64 = 100_000;

/// Index of [`LampState::OFF`] in the standard cycle.
pub const START_INDEX_OFF: usize = 0;

/// Index of [`LampState::COOL`] in the standard cycle.
pub const START_INDEX_COOL: usize = 2;
