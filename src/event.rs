//! Payload delivered from the interrupt handler to the controller.

use crate::time::TimeInstant;
use crate::types::{Edge, SourceId};

/// An edge observed on a monitored input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeEvent<I: TimeInstant> {
    pub source: SourceId,
    pub edge: Edge,
    pub timestamp: I,
}

impl<I: TimeInstant> EdgeEvent<I> {
    /// Creates event.
    pub fn new(source: impl Into<SourceId>, edge: Edge, timestamp: I) -> Self {
        Self {
            source: source.into(),
            edge,
            timestamp,
        }
    }
}
