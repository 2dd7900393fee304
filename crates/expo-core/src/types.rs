//! Series and outcome types shared across the kernel.
//!
//! Series are borrowed views over caller-owned slices. They are validated once
//! on construction so the simulation loop can index them without further
//! bounds reasoning.

use serde::{Deserialize, Serialize};

use crate::constants::{MIN_TIME_POINTS, NO_INFECTION_SENTINEL};
use crate::error::InputError;

/// Non-negative exposure magnitudes, one per interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExposureSeries<'a>(&'a [f64]);

impl<'a> ExposureSeries<'a> {
    /// Validate and wrap a slice of exposures.
    ///
    /// Rejects an empty slice and any element that is negative or non-finite.
    pub fn new(values: &'a [f64]) -> Result<Self, InputError> {
        if values.is_empty() {
            return Err(InputError::EmptyExposures);
        }
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(InputError::NonFiniteExposure { index });
            }
            if value < 0.0 {
                return Err(InputError::NegativeExposure { index, value });
            }
        }
        Ok(Self(values))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated series.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &'a [f64] {
        self.0
    }
}

/// Strictly increasing time points delimiting consecutive intervals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSeries<'a>(&'a [f64]);

impl<'a> TimeSeries<'a> {
    /// Validate and wrap a slice of time points.
    ///
    /// Needs at least two finite points, each strictly greater than the last.
    pub fn new(points: &'a [f64]) -> Result<Self, InputError> {
        if points.len() < MIN_TIME_POINTS {
            return Err(InputError::TooFewTimePoints { got: points.len() });
        }
        for (index, &point) in points.iter().enumerate() {
            if !point.is_finite() {
                return Err(InputError::NonFiniteTime { index });
            }
            if index > 0 && point <= points[index - 1] {
                return Err(InputError::NonIncreasingTimes { index });
            }
        }
        Ok(Self(points))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated series.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of intervals the points delimit.
    pub fn interval_count(&self) -> usize {
        self.0.len() - 1
    }

    /// Time point at `index`, or `None` past the end.
    pub fn point(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Length of interval `index`, bounded by points `index` and `index + 1`.
    pub fn duration(&self, index: usize) -> Option<f64> {
        Some(self.point(index + 1)? - self.point(index)?)
    }

    pub fn as_slice(&self) -> &'a [f64] {
        self.0
    }
}

/// Validated pairing of exposures with the time points bounding them.
///
/// `times` must supply a boundary after every exposure interval, i.e. at
/// least `exposures.len() + 1` points. Trailing points beyond that are
/// accepted and never read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizon<'a> {
    exposures: ExposureSeries<'a>,
    times: TimeSeries<'a>,
}

impl<'a> Horizon<'a> {
    /// Validate raw slices into a horizon.
    ///
    /// # Examples
    ///
    /// ```
    /// use expo_core::types::Horizon;
    /// let horizon = Horizon::from_slices(&[1e7, 1e9, 0.0], &[0.0, 1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(horizon.interval_count(), 3);
    /// ```
    pub fn from_slices(exposures: &'a [f64], times: &'a [f64]) -> Result<Self, InputError> {
        let exposures = ExposureSeries::new(exposures)?;
        let times = TimeSeries::new(times)?;
        Self::new(exposures, times)
    }

    pub fn new(exposures: ExposureSeries<'a>, times: TimeSeries<'a>) -> Result<Self, InputError> {
        let needed = exposures.len() + 1;
        if times.len() < needed {
            return Err(InputError::LengthMismatch {
                exposures: exposures.len(),
                times: times.len(),
                needed,
            });
        }
        Ok(Self { exposures, times })
    }

    pub fn exposures(&self) -> ExposureSeries<'a> {
        self.exposures
    }

    pub fn times(&self) -> TimeSeries<'a> {
        self.times
    }

    /// Number of exposure intervals (N).
    pub fn interval_count(&self) -> usize {
        self.exposures.len()
    }

    /// Exposure magnitude and duration of interval `index`.
    pub fn interval(&self, index: usize) -> Option<(f64, f64)> {
        let exposure = self.exposures.as_slice().get(index).copied()?;
        Some((exposure, self.times.duration(index)?))
    }
}

/// Result of one simulated exposure history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InfectionOutcome {
    /// Infection triggered during `interval`; `time` is the boundary closing
    /// that interval plus the incubation lag.
    Infected { time: f64, interval: usize },
    /// No draw triggered infection over the evaluated intervals.
    NotInfected,
}

impl InfectionOutcome {
    pub fn is_infected(&self) -> bool {
        matches!(self, Self::Infected { .. })
    }

    /// Reported infection time, if any.
    pub fn infection_time(&self) -> Option<f64> {
        match self {
            Self::Infected { time, .. } => Some(*time),
            Self::NotInfected => None,
        }
    }

    /// Legacy numeric form: the infection time, or `-1` when not infected.
    ///
    /// # Examples
    ///
    /// ```
    /// use expo_core::types::InfectionOutcome;
    /// assert_eq!(InfectionOutcome::NotInfected.to_sentinel(), -1.0);
    /// assert_eq!(InfectionOutcome::Infected { time: 3.0, interval: 1 }.to_sentinel(), 3.0);
    /// ```
    pub fn to_sentinel(&self) -> f64 {
        self.infection_time().unwrap_or(NO_INFECTION_SENTINEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- ExposureSeries ---

    #[test]
    fn exposures_reject_empty() {
        assert_eq!(ExposureSeries::new(&[]), Err(InputError::EmptyExposures));
    }

    #[test]
    fn exposures_reject_negative() {
        assert_eq!(
            ExposureSeries::new(&[1.0, -2.0]),
            Err(InputError::NegativeExposure { index: 1, value: -2.0 })
        );
    }

    #[test]
    fn exposures_reject_non_finite() {
        assert_eq!(
            ExposureSeries::new(&[f64::NAN]),
            Err(InputError::NonFiniteExposure { index: 0 })
        );
        assert_eq!(
            ExposureSeries::new(&[0.0, f64::INFINITY]),
            Err(InputError::NonFiniteExposure { index: 1 })
        );
    }

    #[test]
    fn exposures_accept_zero() {
        let series = ExposureSeries::new(&[0.0, 0.0]).unwrap();
        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
    }

    // --- TimeSeries ---

    #[test]
    fn times_reject_single_point() {
        assert_eq!(
            TimeSeries::new(&[0.0]),
            Err(InputError::TooFewTimePoints { got: 1 })
        );
        assert_eq!(
            TimeSeries::new(&[]),
            Err(InputError::TooFewTimePoints { got: 0 })
        );
    }

    #[test]
    fn times_reject_repeated_point() {
        assert_eq!(
            TimeSeries::new(&[0.0, 1.0, 1.0]),
            Err(InputError::NonIncreasingTimes { index: 2 })
        );
    }

    #[test]
    fn times_reject_nan() {
        assert_eq!(
            TimeSeries::new(&[0.0, f64::NAN]),
            Err(InputError::NonFiniteTime { index: 1 })
        );
    }

    #[test]
    fn times_durations() {
        let times = TimeSeries::new(&[0.0, 1.5, 4.0]).unwrap();
        assert_eq!(times.interval_count(), 2);
        assert_eq!(times.duration(0), Some(1.5));
        assert_eq!(times.duration(1), Some(2.5));
        assert_eq!(times.duration(2), None);
    }

    // --- Horizon ---

    #[test]
    fn horizon_exact_lengths() {
        let horizon = Horizon::from_slices(&[1.0, 2.0], &[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(horizon.interval_count(), 2);
        assert_eq!(horizon.interval(1), Some((2.0, 1.0)));
        assert_eq!(horizon.interval(2), None);
    }

    #[test]
    fn horizon_accepts_trailing_time_points() {
        let horizon = Horizon::from_slices(&[1e7, 1e9], &[0.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(horizon.interval_count(), 2);
    }

    #[test]
    fn horizon_rejects_short_times() {
        assert_eq!(
            Horizon::from_slices(&[1.0, 2.0, 3.0], &[0.0, 1.0, 2.0]),
            Err(InputError::LengthMismatch { exposures: 3, times: 3, needed: 4 })
        );
    }

    #[test]
    fn horizon_checks_exposures_first() {
        assert_eq!(Horizon::from_slices(&[], &[0.0]), Err(InputError::EmptyExposures));
    }

    // --- InfectionOutcome ---

    #[test]
    fn outcome_sentinel() {
        assert_eq!(InfectionOutcome::NotInfected.to_sentinel(), NO_INFECTION_SENTINEL);
        let infected = InfectionOutcome::Infected { time: 2.0, interval: 0 };
        assert_eq!(infected.to_sentinel(), 2.0);
        assert!(infected.is_infected());
        assert_eq!(InfectionOutcome::NotInfected.infection_time(), None);
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json = serde_json::to_string(&InfectionOutcome::Infected { time: 2.0, interval: 0 }).unwrap();
        assert_eq!(json, r#"{"status":"infected","time":2.0,"interval":0}"#);
        let json = serde_json::to_string(&InfectionOutcome::NotInfected).unwrap();
        assert_eq!(json, r#"{"status":"not_infected"}"#);
    }

    // --- proptest ---

    proptest! {
        #[test]
        fn increasing_times_always_accepted(
            start in -1e6f64..1e6,
            steps in prop::collection::vec(1e-3f64..100.0, 1..20),
        ) {
            let mut points = vec![start];
            for step in &steps {
                let last = *points.last().unwrap();
                points.push(last + step);
            }
            let times = TimeSeries::new(&points).unwrap();
            prop_assert_eq!(times.interval_count(), steps.len());
            for i in 0..steps.len() {
                prop_assert!(times.duration(i).unwrap() > 0.0);
            }
        }

        #[test]
        fn non_negative_exposures_always_accepted(
            values in prop::collection::vec(0.0f64..1e12, 1..20),
        ) {
            prop_assert!(ExposureSeries::new(&values).is_ok());
        }
    }
}
