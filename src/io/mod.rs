//! Command line, configuration, errors and progress reporting

/// Command-line parsing and pipeline orchestration
pub mod cli;
/// Constants and the run configuration
pub mod configuration;
/// Error types
pub mod error;
/// Pipeline step progress display
pub mod progress;
