//! Steiner solver input generator module.

mod steiner;

pub use steiner::{generate_steiner, LineWriter};
