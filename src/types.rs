//! Core types shared by the state machine and the trigger source.

/// Logical state of one LED channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelState {
    /// Channel lit.
    On,

    /// Channel dark.
    Off,
}

impl ChannelState {
    /// Returns true if the channel is lit.
    #[inline]
    pub fn is_on(self) -> bool {
        self == ChannelState::On
    }
}

/// One of the two LED channels of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Warm white channel.
    Warm,

    /// Cool white channel.
    Cool,
}

/// A single row of the lamp state table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LampState {
    /// Warm channel state.
    pub warm: ChannelState,

    /// Cool channel state.
    pub cool: ChannelState,
}

impl LampState {
    /// Both channels dark.
    pub const OFF: Self = Self::new(ChannelState::Off, ChannelState::Off);

    /// Both channels lit.
    pub const BOTH: Self = Self::new(ChannelState::On, ChannelState::On);

    /// Cool channel only.
    pub const COOL: Self = Self::new(ChannelState::Off, ChannelState::On);

    /// Warm channel only.
    pub const WARM: Self = Self::new(ChannelState::On, ChannelState::Off);

    /// Creates a new lamp state.
    #[inline]
    pub const fn new(warm: ChannelState, cool: ChannelState) -> Self {
        Self { warm, cool }
    }

    /// Returns the state of the given channel.
    #[inline]
    pub fn channel(&self, channel: Channel) -> ChannelState {
        match channel {
            Channel::Warm => self.warm,
            Channel::Cool => self.cool,
        }
    }
}

/// Edge direction an input is monitored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Low to high transition.
    Rising,

    /// High to low transition.
    Falling,
}

/// Identifier of an interrupt source, normally the GPIO number of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SourceId(pub u8);

impl From<u8> for SourceId {
    fn from(id: u8) -> Self {
        SourceId(id)
    }
}

impl From<SourceId> for u8 {
    fn from(id: SourceId) -> Self {
        id.0
    }
}

/// Construction and configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LampError {
    /// No states provided.
    EmptyCycle,

    /// Cycle capacity exceeded.
    CapacityExceeded,

    /// Startup index does not address a row of the cycle.
    StartIndexOutOfRange {
        /// Requested startup index
        index: usize,
        /// Number of states in the cycle
        len: usize,
    },
}

impl core::fmt::Display for LampError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LampError::EmptyCycle => {
                write!(f, "lamp cycle must have at least one state")
            }
            LampError::CapacityExceeded => {
                write!(f, "lamp cycle capacity exceeded")
            }
            LampError::StartIndexOutOfRange { index, len } => {
                write!(
                    f,
                    "startup index {} is out of range for a cycle of {} states",
                    index, len
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LampError {}
