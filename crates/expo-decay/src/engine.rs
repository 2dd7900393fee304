//! Clearance model implementing the [`ExposureModel`] trait.
//!
//! Binds a hazard coefficient and clearance rate to the closed-form kinetics
//! in [`crate::kinetics`].

use expo_core::error::{ConfigError, NumericError};
use expo_core::params::SimulationParams;
use expo_core::traits::ExposureModel;

use crate::kinetics::{current_exposure, risk_multiplier};

/// The production exposure model: exponential clearance with a linear
/// exposure-to-hazard link.
///
/// Implements [`ExposureModel`] with:
/// - Decay `exposure * exp(-clr * elapsed)`
/// - Interval risk from the integrated hazard of the decaying exposure
/// - The `clr == 0` limit taken in closed form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearanceModel {
    hazard_risk: f64,
    clr: f64,
}

impl Default for ClearanceModel {
    fn default() -> Self {
        let params = SimulationParams::default();
        Self::new(params.hazard_risk, params.clr)
    }
}

impl ClearanceModel {
    /// Create a model without validating the parameters.
    pub fn new(hazard_risk: f64, clr: f64) -> Self {
        Self { hazard_risk, clr }
    }

    /// Create a model from validated simulation parameters.
    pub fn from_params(params: &SimulationParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self::new(params.hazard_risk, params.clr))
    }

    pub fn hazard_risk(&self) -> f64 {
        self.hazard_risk
    }

    pub fn clr(&self) -> f64 {
        self.clr
    }

    /// Interval risk that fails on a NaN result instead of returning it.
    ///
    /// NaN arises from indeterminate products such as `0 * inf` when an
    /// exposure has overflowed. Saturation to exactly `0` or `1` is not an error.
    pub fn checked_risk(
        &self,
        exposure: f64,
        start_time: f64,
        final_day: f64,
    ) -> Result<f64, NumericError> {
        let risk = self.risk_multiplier(exposure, start_time, final_day);
        if risk.is_nan() {
            return Err(NumericError::NonFinite { what: "risk_multiplier" });
        }
        Ok(risk)
    }
}

impl ExposureModel for ClearanceModel {
    fn current_exposure(&self, exposure: f64, start_time: f64, final_day: f64) -> f64 {
        current_exposure(exposure, start_time, final_day, self.clr)
    }

    fn risk_multiplier(&self, exposure: f64, start_time: f64, final_day: f64) -> f64 {
        risk_multiplier(exposure, start_time, final_day, self.hazard_risk, self.clr)
    }
}
