//! [`LampOutputs`] implementation over `embedded-hal` digital output pins.
//!
//! The reference strip shares one 3.3V supply rail and sinks each channel
//! through its controlled pin, so a channel lights when its pin is driven low.

use crate::lamp::LampOutputs;
use crate::types::{Channel, ChannelState};
use embedded_hal::digital::{OutputPin, PinState};

/// Pin level that lights a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Driving low turns the channel on. Reference wiring.
    #[default]
    ActiveLow,

    /// Driving high turns the channel on.
    ActiveHigh,
}

impl Polarity {
    /// Converts a logical channel state to the pin level that produces it.
    #[inline]
    pub fn pin_state(self, state: ChannelState) -> PinState {
        PinState::from(state.is_on() == (self == Polarity::ActiveHigh))
    }
}

/// Warm and cool channel pins.
///
/// Pin errors are discarded; [`LampOutputs`] cannot fail.
pub struct GpioChannels<W, C>
where
    W: OutputPin,
    C: OutputPin,
{
    warm: W,
    cool: C,
    polarity: Polarity,
}

impl<W, C> GpioChannels<W, C>
where
    W: OutputPin,
    C: OutputPin,
{
    /// Creates channels with the reference active-low wiring.
    pub fn new(warm: W, cool: C) -> Self {
        Self::with_polarity(warm, cool, Polarity::ActiveLow)
    }

    /// Creates channels with an explicit polarity.
    pub fn with_polarity(warm: W, cool: C, polarity: Polarity) -> Self {
        Self {
            warm,
            cool,
            polarity,
        }
    }

    /// Returns the configured polarity.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Returns the pins.
    pub fn release(self) -> (W, C) {
        (self.warm, self.cool)
    }
}

impl<W, C> LampOutputs for GpioChannels<W, C>
where
    W: OutputPin,
    C: OutputPin,
{
    fn set_channel(&mut self, channel: Channel, state: ChannelState) {
        let level = self.polarity.pin_state(state);
        match channel {
            Channel::Warm => {
                let _ = self.warm.set_state(level);
            }
            Channel::Cool => {
                let _ = self.cool.set_state(level);
            }
        }
    }
}
