//! Simulation parameters.
//!
//! Provides [`SimulationParams`] with defaults taken from the reference
//! worked example. Parameters can be built programmatically or deserialized
//! from any serde format the caller already uses.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CLR, DEFAULT_HAZARD_RISK, DEFAULT_LAG};
use crate::error::ConfigError;

/// Scalar parameters of one simulated exposure history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Incubation delay added to the infecting interval boundary.
    pub lag: f64,
    /// Per-unit-exposure infection hazard. Must be non-negative.
    pub hazard_risk: f64,
    /// Exponential clearance rate. Zero and negative rates are allowed.
    pub clr: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            lag: DEFAULT_LAG,
            hazard_risk: DEFAULT_HAZARD_RISK,
            clr: DEFAULT_CLR,
        }
    }
}

impl SimulationParams {
    pub fn new(lag: f64, hazard_risk: f64, clr: f64) -> Self {
        Self { lag, hazard_risk, clr }
    }

    /// Check every parameter is finite and `hazard_risk` is non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("lag", self.lag), ("hazard_risk", self.hazard_risk), ("clr", self.clr)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteParameter { name });
            }
        }
        if self.hazard_risk < 0.0 {
            return Err(ConfigError::NegativeParameter { name: "hazard_risk" });
        }
        Ok(())
    }
}
