//! Numeric line format read by the Steiner tree solver.
//!
//! One value per line, no labels:
//!
//! ```text
//! min_x
//! min_y
//! max_x
//! max_y
//! <pin count>
//! x_1
//! y_1
//! ...
//! ```

use crate::model::SteinerNet;
use std::fmt::Write;

/// Line-oriented output buffer.
#[derive(Debug, Default)]
pub struct LineWriter {
    /// Output buffer.
    buffer: String,
    /// Number of lines written so far.
    lines: usize,
}

impl LineWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines written so far.
    pub fn line_count(&self) -> usize {
        self.lines
    }

    /// Take the generated text.
    pub fn take_output(self) -> String {
        self.buffer
    }

    /// Write one value on its own line, verbatim.
    pub fn write_value(&mut self, value: impl std::fmt::Display) {
        // Writing into a String cannot fail.
        let _ = writeln!(self.buffer, "{}", value);
        self.lines += 1;
    }
}

/// Generate the solver input for a net.
pub fn generate_steiner(net: &SteinerNet) -> String {
    let mut writer = LineWriter::new();

    for bound in net.grid.bounds() {
        writer.write_value(bound);
    }

    writer.write_value(net.pin_count());
    for pin in &net.pins {
        writer.write_value(&pin.x);
        writer.write_value(&pin.y);
    }

    tracing::debug!("Generated {} line(s)", writer.line_count());
    writer.take_output()
}
