//! # expo-decay — Exponential clearance and interval infection risk.
//!
//! This crate implements the two pure building blocks of the kernel:
//! - **Clearance**: exposure decays as `exposure * exp(-clr * elapsed)`.
//! - **Interval risk**: the infection probability accrued while an exposure
//!   decays over an interval, `1 - exp(-(h/clr) * e * (1 - exp(-clr * elapsed)))`,
//!   with the `clr -> 0` limit `1 - exp(-h * e * elapsed)` taken explicitly.
//!
//! [`ClearanceModel`] binds a hazard and clearance rate and implements
//! [`ExposureModel`](expo_core::traits::ExposureModel).

pub mod engine;
pub mod kinetics;

pub use engine::ClearanceModel;
pub use kinetics::{current_exposure, risk_multiplier};
