//! Grid resolution and color tallying

/// Resolved color grid
pub mod grid;
/// Per-color counts over a grid
pub mod tally;

pub use grid::Grid;
pub use tally::Tally;
