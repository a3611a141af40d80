//! Data model types for XML to Steiner conversion.

mod grid;
mod net;
mod pin;

pub use grid::Grid;
pub use net::SteinerNet;
pub use pin::Pin;
