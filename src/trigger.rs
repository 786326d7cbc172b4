//! Edge filtering and debouncing for the button input.
//!
//! [`DebouncedTrigger`] turns noisy edges from a mechanical button into at most
//! one accepted trigger per debounce window. Rejected edges are not errors; they
//! are reported as a [`TriggerOutcome`] and otherwise leave no trace.

use crate::event::EdgeEvent;
use crate::time::TimeInstant;
use crate::types::{Edge, SourceId};

/// What the trigger source did with an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriggerOutcome {
    /// The edge is a new press. The lamp has advanced.
    Accepted,

    /// The edge arrived inside the debounce window and was dropped.
    Bounced,

    /// The edge came from an input other than the button.
    ForeignSource,

    /// The edge has the opposite direction to the one monitored.
    OtherEdge,
}

impl TriggerOutcome {
    /// Returns true if the edge was accepted.
    #[inline]
    pub fn is_accepted(self) -> bool {
        self == TriggerOutcome::Accepted
    }
}

/// Counters of how edges were handled.
///
/// Counters saturate instead of wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TriggerStats {
    pub accepted: u32,
    pub bounced: u32,
    pub ignored: u32,
}

impl TriggerStats {
    fn record(&mut self, outcome: TriggerOutcome) {
        let counter = match outcome {
            TriggerOutcome::Accepted => &mut self.accepted,
            TriggerOutcome::Bounced => &mut self.bounced,
            TriggerOutcome::ForeignSource | TriggerOutcome::OtherEdge => &mut self.ignored,
        };
        *counter = counter.saturating_add(1);
    }
}

/// Rate-limited trigger bound to a single input and edge direction.
///
/// An edge is accepted when it comes from the configured source, has the
/// configured direction, and at least `window` has elapsed since the last
/// accepted edge. The boundary is inclusive: an edge exactly `window` after
/// the previous one is accepted. The first edge is always accepted.
///
/// # Type Parameters
/// * `I` - Time instant type
#[derive(Debug, Clone)]
pub struct DebouncedTrigger<I: TimeInstant> {
    source: SourceId,
    edge: Edge,
    window: I::Duration,
    last_accepted: Option<I>,
    stats: TriggerStats,
}

impl<I: TimeInstant> DebouncedTrigger<I> {
    /// Creates a trigger that has never fired.
    pub fn new(source: impl Into<SourceId>, edge: Edge, window: I::Duration) -> Self {
        Self {
            source: source.into(),
            edge,
            window,
            last_accepted: None,
            stats: TriggerStats::default(),
        }
    }

    /// Filters an edge.
    ///
    /// On acceptance the event timestamp becomes the new reference point.
    /// Any other outcome leaves the trigger state unchanged apart from the
    /// statistics.
    pub fn on_edge(&mut self, event: &EdgeEvent<I>) -> TriggerOutcome {
        let outcome = self.classify(event);

        if outcome.is_accepted() {
            self.last_accepted = Some(event.timestamp);
        }

        self.stats.record(outcome);
        outcome
    }

    fn classify(&self, event: &EdgeEvent<I>) -> TriggerOutcome {
        if event.source != self.source {
            return TriggerOutcome::ForeignSource;
        }

        if event.edge != self.edge {
            return TriggerOutcome::OtherEdge;
        }

        match self.last_accepted {
            Some(last) if event.timestamp.duration_since(last) < self.window => {
                TriggerOutcome::Bounced
            }
            _ => TriggerOutcome::Accepted,
        }
    }

    /// Returns the timestamp of the last accepted edge.
    pub fn last_accepted(&self) -> Option<I> {
        self.last_accepted
    }

    /// Returns the earliest instant at which an edge would be accepted.
    ///
    /// `None` if nothing has been accepted yet (any edge is accepted) or if the
    /// instant is not representable.
    pub fn ready_at(&self) -> Option<I> {
        self.last_accepted
            .and_then(|last| last.checked_add(self.window))
    }

    /// Returns the monitored source.
    pub fn source(&self) -> SourceId {
        self.source
    }

    /// Returns the monitored edge direction.
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Returns the debounce window.
    pub fn window(&self) -> I::Duration {
        self.window
    }

    /// Returns edge handling counters.
    pub fn stats(&self) -> TriggerStats {
        self.stats
    }
}
