//! SteinerNet - Everything the solver needs from one input file.

use super::{Grid, Pin};
use serde::Serialize;

/// Grid bounds plus the pins to connect, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SteinerNet {
    /// Routing area.
    pub grid: Grid,
    /// Pins in document order.
    pub pins: Vec<Pin>,
}

impl SteinerNet {
    /// Create a net from a grid and its pins.
    pub fn new(grid: Grid, pins: Vec<Pin>) -> Self {
        Self { grid, pins }
    }

    /// Number of pins.
    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }
}
