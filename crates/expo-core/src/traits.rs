//! Core trait defining the boundary between the kernel crates.
//!
//! - [`ExposureModel`] — exposure decay and per-interval risk (expo-decay implements)

/// Exposure decay and infection risk over one interval.
///
/// Implementations are pure: identical inputs always give bit-identical
/// outputs. Floating-point overflow is reported as IEEE infinity, not as an
/// error. The simulation driver (expo-sim) is generic over this trait so
/// alternative clearance laws can be dropped in.
pub trait ExposureModel: Send + Sync {
    /// Exposure remaining after decaying from `start_time` to `final_day`.
    fn current_exposure(&self, exposure: f64, start_time: f64, final_day: f64) -> f64;

    /// Probability of infection accruing while `exposure` decays from
    /// `start_time` to `final_day`.
    fn risk_multiplier(&self, exposure: f64, start_time: f64, final_day: f64) -> f64;

    /// Risk of an interval of length `duration` evaluated from time zero.
    ///
    /// Default implementation: `risk_multiplier(exposure, 0.0, duration)`.
    fn interval_risk(&self, exposure: f64, duration: f64) -> f64 {
        self.risk_multiplier(exposure, 0.0, duration)
    }

    /// Exposure carried past an interval of length `duration`.
    ///
    /// Default implementation: `current_exposure(exposure, 0.0, duration)`.
    fn carried_exposure(&self, exposure: f64, duration: f64) -> f64 {
        self.current_exposure(exposure, 0.0, duration)
    }
}
