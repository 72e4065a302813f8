//! Report writers: each turns the resolved grid and tally into one artifact
//!
//! Writers share no state and can run in any order.

/// Structured JSON export
pub mod export;
/// Preferred-font selection with a bitmap fallback
pub mod font;
/// Row-by-row assembly guide
pub mod guide;
/// Blueprint image rendering
pub mod image;
/// Parts list with cost estimate
pub mod parts;
/// Formatting helpers shared by the text reports
pub mod text;
