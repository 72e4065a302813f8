//! Unit tests for the `plan` modules

mod tally;
