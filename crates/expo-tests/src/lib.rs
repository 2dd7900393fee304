//! Integration test suite for the Expo kernel.
//!
//! Tests under `tests/` exercise the crates together through their public
//! APIs: algebraic properties of the pure functions, statistical
//! behaviour of the simulation loop over many seeded trials, and concurrent
//! callers each drawing from their own generator.

pub mod helpers;
