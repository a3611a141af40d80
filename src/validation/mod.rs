//! Structure checks and data extraction.

mod validate;

pub use validate::{
    check_structure, extract_grid, extract_pins, require_attribute, validate_document,
};
