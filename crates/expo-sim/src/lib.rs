//! # expo-sim — Infection-time simulation driver.
//!
//! Steps a single host through consecutive exposure intervals. Exposure
//! carried from earlier intervals decays at each boundary and adds to the
//! next interval's fresh exposure; one uniform draw per interval decides
//! whether infection (an absorbing state) occurs.
//!
//! Randomness is always injected: pass a seeded generator for reproducible
//! runs, or use the thread-local generator via
//! [`simulate_infection_time_thread_rng`]. No state is shared between calls.

pub mod rng;
pub mod simulation;
pub mod simulator;

pub use rng::seeded_rng;
pub use simulation::{simulate, simulate_infection_time, simulate_infection_time_thread_rng};
pub use simulator::Simulator;
