//! Pin - Terminal the solver has to connect.

use serde::Serialize;

/// Pin location, coordinates kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pin {
    pub x: String,
    pub y: String,
}

impl Pin {
    /// Create a pin at the given coordinates.
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}
