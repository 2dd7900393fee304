//! Error types for the Expo kernel.
use thiserror::Error;

/// Malformed exposure or time series, rejected before any simulation step.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("exposure series is empty")] EmptyExposures,
    #[error("time series needs at least 2 points, got {got}")] TooFewTimePoints { got: usize },
    #[error("length mismatch: {exposures} exposures need at least {needed} time points, got {times}")] LengthMismatch { exposures: usize, times: usize, needed: usize },
    #[error("negative exposure {value} at index {index}")] NegativeExposure { index: usize, value: f64 },
    #[error("non-finite exposure at index {index}")] NonFiniteExposure { index: usize },
    #[error("non-finite time point at index {index}")] NonFiniteTime { index: usize },
    #[error("time points not strictly increasing at index {index}")] NonIncreasingTimes { index: usize },
}

/// A computation produced a value with no meaningful interpretation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    #[error("non-finite result from {what}")] NonFinite { what: &'static str },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("parameter `{name}` must be finite")] NonFiniteParameter { name: &'static str },
    #[error("parameter `{name}` must be non-negative")] NegativeParameter { name: &'static str },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpoError {
    #[error(transparent)] Input(#[from] InputError),
    #[error(transparent)] Numeric(#[from] NumericError),
    #[error(transparent)] Config(#[from] ConfigError),
}

impl ExpoError {
    /// True for the invalid-input kind (bad series shape or contents).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }

    /// True for the numeric-degenerate kind.
    pub fn is_numeric_degenerate(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}
