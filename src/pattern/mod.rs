//! Design symbols and their color resolution tables

/// Built-in design rows
pub mod design;
/// Symbol to color mapping with display and cost attributes
pub mod palette;
/// Pattern fitting to the target grid size
pub mod source;

pub use palette::{ColorId, ColorSpec, Palette};
pub use source::Pattern;
