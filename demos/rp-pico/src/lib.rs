#![no_std]

pub mod time;

use lamp_cycler::Edge;
use rp_pico::hal::gpio::Interrupt;

/// GPIO interrupt that fires on the given edge.
pub fn edge_interrupt(edge: Edge) -> Interrupt {
    match edge {
        Edge::Rising => Interrupt::EdgeHigh,
        Edge::Falling => Interrupt::EdgeLow,
    }
}
