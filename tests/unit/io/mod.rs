//! Unit tests for the `io` modules

mod cli;
