//! Logging setup for protoform.
//!
//! The library crates only emit `tracing` events; applications and tests
//! pick a subscriber from here.

pub mod tracing_setup;
