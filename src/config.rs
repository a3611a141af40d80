//! Tag names, attribute names and required values of the net XML format.

/// Name of the top-level element.
pub const ROOT_TAG: &str = "root";

/// Name of the routing area element.
pub const GRID_TAG: &str = "grid";

/// Name of the pin container element.
pub const NET_TAG: &str = "net";

/// Name of a pin element.
pub const POINT_TAG: &str = "point";

/// Number of element children the root must have (grid, then net).
pub const ROOT_CHILD_COUNT: usize = 2;

/// Grid bound attributes, in output order.
pub const GRID_BOUNDS: [&str; 4] = ["min_x", "min_y", "max_x", "max_y"];

/// Point layer attribute.
pub const ATTR_LAYER: &str = "layer";

/// Point type attribute.
pub const ATTR_TYPE: &str = "type";

/// Point X coordinate attribute.
pub const ATTR_X: &str = "x";

/// Point Y coordinate attribute.
pub const ATTR_Y: &str = "y";

/// The only accepted value of `layer`.
pub const PIN_LAYER: &str = "pins";

/// The only accepted value of `type`.
pub const PIN_TYPE: &str = "pin";
