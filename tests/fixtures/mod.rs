//! Test fixtures and helpers for PIN input tests.
//!
//! - [`Recorder`] - Captures every widget callback in order
//! - [`driver`] - Typing, rendering and cell-dump helpers

#![allow(clippy::nursery)] // Test fixtures prioritize clarity over pedantry
#![allow(clippy::pedantic)] // Test fixtures prioritize clarity over pedantry
#![allow(dead_code)] // Shared test helpers; not every integration test uses every helper

pub mod driver;
pub mod recorder;

pub use driver::*;
pub use recorder::*;
