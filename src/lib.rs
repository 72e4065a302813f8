//! Build plans for pixel-art brick mosaics
//!
//! A fixed symbol pattern is fitted to the brick grid, resolved through a
//! palette into colors and tallied. Independent writers then produce a
//! labeled blueprint image, a parts list with cost estimate, a bottom-up
//! assembly guide and a JSON export of the whole plan.

#![forbid(unsafe_code)]

/// Command line, configuration, errors and progress reporting
pub mod io;
/// Design symbols, pattern fitting and the color palette
pub mod pattern;
/// Grid resolution and color tallying
pub mod plan;
/// Blueprint, parts list, assembly guide and JSON export writers
pub mod report;

pub use io::error::{PlanError, Result};
