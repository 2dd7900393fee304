//! Kernel constants. Times are in caller-defined units (typically days).

/// Legacy numeric result meaning "no infection observed within the horizon".
///
/// Returned by the sentinel adapters in place of an infection time.
///
/// # Examples
///
/// ```
/// use expo_core::constants::NO_INFECTION_SENTINEL;
/// assert_eq!(NO_INFECTION_SENTINEL, -1.0);
/// ```
pub const NO_INFECTION_SENTINEL: f64 = -1.0;

/// Default incubation lag added to the infecting interval boundary.
pub const DEFAULT_LAG: f64 = 1.0;

/// Default per-unit-exposure infection hazard.
pub const DEFAULT_HAZARD_RISK: f64 = 1e-9;

/// Default exponential clearance rate (per time unit).
pub const DEFAULT_CLR: f64 = 1.0;

/// Minimum number of time points needed to delimit one interval.
pub const MIN_TIME_POINTS: usize = 2;
