//! Parameter-bound simulator.
//!
//! [`Simulator`] validates [`SimulationParams`] once and then runs any number
//! of exposure histories with them, each drawing from the caller's generator.

use expo_core::error::{ConfigError, ExpoError, NumericError};
use expo_core::params::SimulationParams;
use expo_core::traits::ExposureModel;
use expo_core::types::{Horizon, InfectionOutcome};
use expo_decay::engine::ClearanceModel;
use rand::Rng;
use tracing::debug;

use crate::simulation::simulate;

/// Runs exposure histories against a fixed model and incubation lag.
#[derive(Debug, Clone)]
pub struct Simulator<M = ClearanceModel> {
    model: M,
    lag: f64,
}

impl Simulator<ClearanceModel> {
    /// Build a simulator with the exponential clearance model.
    pub fn new(params: SimulationParams) -> Result<Self, ConfigError> {
        let model = ClearanceModel::from_params(&params)?;
        debug!(
            lag = params.lag,
            hazard_risk = params.hazard_risk,
            clr = params.clr,
            "simulator: configured"
        );
        Ok(Self { model, lag: params.lag })
    }
}

impl<M: ExposureModel> Simulator<M> {
    /// Build a simulator around a custom exposure model.
    pub fn with_model(model: M, lag: f64) -> Result<Self, ConfigError> {
        if !lag.is_finite() {
            return Err(ConfigError::NonFiniteParameter { name: "lag" });
        }
        Ok(Self { model, lag })
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn lag(&self) -> f64 {
        self.lag
    }

    /// Validate raw series and simulate one history.
    pub fn run<R: Rng + ?Sized>(
        &self,
        exposures: &[f64],
        times: &[f64],
        rng: &mut R,
    ) -> Result<InfectionOutcome, ExpoError> {
        let horizon = Horizon::from_slices(exposures, times)?;
        Ok(self.run_horizon(&horizon, rng)?)
    }

    /// Simulate one history over an already validated horizon.
    ///
    /// Fails only when the model yields a NaN interval risk.
    pub fn run_horizon<R: Rng + ?Sized>(
        &self,
        horizon: &Horizon<'_>,
        rng: &mut R,
    ) -> Result<InfectionOutcome, NumericError> {
        simulate(&self.model, horizon, self.lag, rng)
    }
}
