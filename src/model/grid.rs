//! Grid - Bounding rectangle of the routing area.

use serde::Serialize;

/// Routing area bounds, kept exactly as written in the source attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub min_x: String,
    pub min_y: String,
    pub max_x: String,
    pub max_y: String,
}

impl Grid {
    /// Create a grid from its four bounds.
    pub fn new(
        min_x: impl Into<String>,
        min_y: impl Into<String>,
        max_x: impl Into<String>,
        max_y: impl Into<String>,
    ) -> Self {
        Self {
            min_x: min_x.into(),
            min_y: min_y.into(),
            max_x: max_x.into(),
            max_y: max_y.into(),
        }
    }

    /// Bounds in output order: min_x, min_y, max_x, max_y.
    pub fn bounds(&self) -> [&str; 4] {
        [&self.min_x, &self.min_y, &self.max_x, &self.max_y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_order() {
        let grid = Grid::new("0", "1", "10", "11");
        assert_eq!(grid.bounds(), ["0", "1", "10", "11"]);
    }
}
