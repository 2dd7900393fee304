//! The interval-stepping simulation loop and its sentinel-returning entry points.

use expo_core::error::{ExpoError, NumericError};
use expo_core::params::SimulationParams;
use expo_core::traits::ExposureModel;
use expo_core::types::{Horizon, InfectionOutcome};
use expo_decay::engine::ClearanceModel;
use rand::Rng;
use tracing::{debug, trace, warn};

use crate::rng::uniform;

/// Simulate one exposure history over a validated horizon.
///
/// For each interval `i`, the fresh exposure `exposures[i]` plus the exposure
/// carried from earlier intervals gives an interval risk (evaluated from time
/// zero over the interval's duration). One uniform draw below that risk means
/// infection, reported at `times[i + 1] + lag`. Otherwise the combined
/// exposure decays over the interval and is carried forward.
///
/// Only intervals `0..N-1` are drawn: the last exposure interval is never
/// evaluated, so a single-interval horizon is always [`InfectionOutcome::NotInfected`].
///
/// A NaN interval risk (e.g. zero hazard against an exposure that grew to
/// infinity under a negative `clr`) stops the run with
/// [`NumericError::NonFinite`]; saturated risks of exactly `0` or `1` do not.
pub fn simulate<M, R>(
    model: &M,
    horizon: &Horizon<'_>,
    lag: f64,
    rng: &mut R,
) -> Result<InfectionOutcome, NumericError>
where
    M: ExposureModel + ?Sized,
    R: Rng + ?Sized,
{
    let times = horizon.times();
    let evaluated = horizon.interval_count().saturating_sub(1);

    let mut carried = 0.0;
    for index in 0..evaluated {
        let (Some((fresh, duration)), Some(boundary)) =
            (horizon.interval(index), times.point(index + 1))
        else {
            break;
        };
        let exposure = fresh + carried;
        let risk = model.interval_risk(exposure, duration);
        if risk.is_nan() {
            warn!(index, exposure, duration, "simulate: interval risk is NaN");
            return Err(NumericError::NonFinite { what: "interval_risk" });
        }
        let draw = uniform(rng);
        trace!(index, exposure, risk, draw, "simulate: interval drawn");

        if draw < risk {
            let time = boundary + lag;
            debug!(interval = index, time, "simulate: infected");
            return Ok(InfectionOutcome::Infected { time, interval: index });
        }
        carried = model.carried_exposure(exposure, duration);
    }

    debug!(evaluated, carried, "simulate: no infection over horizon");
    Ok(InfectionOutcome::NotInfected)
}

/// Simulate one exposure history from raw series, returning the legacy
/// numeric result: the infection time, or `-1` when no infection occurred.
///
/// Series are validated before any draw is made; see
/// [`Horizon::from_slices`] for the accepted shapes. Parameters must be finite
/// and `hazard_risk` non-negative. A NaN interval risk is reported as
/// [`ExpoError::Numeric`] rather than read as "no infection".
///
/// # Examples
///
/// ```
/// use expo_sim::{seeded_rng, simulate_infection_time};
/// let mut rng = seeded_rng(1);
/// let t = simulate_infection_time(&[1e7, 1e9], &[0.0, 1.0, 2.0, 3.0], 1.0, 0.0, 1.0, &mut rng).unwrap();
/// assert_eq!(t, -1.0);
/// ```
pub fn simulate_infection_time<R: Rng + ?Sized>(
    exposures: &[f64],
    times: &[f64],
    lag: f64,
    hazard_risk: f64,
    clr: f64,
    rng: &mut R,
) -> Result<f64, ExpoError> {
    let horizon = Horizon::from_slices(exposures, times)?;
    let model = ClearanceModel::from_params(&SimulationParams::new(lag, hazard_risk, clr))?;
    Ok(simulate(&model, &horizon, lag, rng)?.to_sentinel())
}

/// [`simulate_infection_time`] drawing from the calling thread's generator.
///
/// Each thread owns its generator, so concurrent callers never share state.
pub fn simulate_infection_time_thread_rng(
    exposures: &[f64],
    times: &[f64],
    lag: f64,
    hazard_risk: f64,
    clr: f64,
) -> Result<f64, ExpoError> {
    simulate_infection_time(exposures, times, lag, hazard_risk, clr, &mut rand::thread_rng())
}
