//! Closed-form clearance kinetics.
//!
//! Both functions are pure `f64 -> f64` maps. Extreme inputs saturate to IEEE
//! special values (infinity, zero) instead of failing; callers needing a hard
//! error use [`ClearanceModel::checked_risk`](crate::ClearanceModel::checked_risk).
//!
//! `1 - exp(-x)` is evaluated as `-expm1(-x)` throughout, which keeps small
//! risks accurate and lets a tiny `clr` converge onto the `clr == 0` limit.

/// Exposure remaining after decaying from `start_time` to `final_day` at rate `clr`.
///
/// Computes `exposure * exp(-clr * (final_day - start_time))`. A negative
/// elapsed time or negative `clr` yields growth; overflow yields infinity.
///
/// # Examples
///
/// ```
/// use expo_decay::current_exposure;
/// let e = current_exposure(1e7, 0.0, 5.0, 2.0);
/// assert!((e - 1e7 * (-10.0f64).exp()).abs() < 1e-6);
/// ```
pub fn current_exposure(exposure: f64, start_time: f64, final_day: f64, clr: f64) -> f64 {
    exposure * (-clr * (final_day - start_time)).exp()
}

/// Probability of infection accruing while `exposure` decays from
/// `start_time` to `final_day`.
///
/// The cumulative hazard over the interval is the integral of
/// `hazard_risk * exposure * exp(-clr * t)`, i.e.
/// `(hazard_risk / clr) * exposure * (1 - exp(-clr * elapsed))`, and the risk is
/// `1 - exp(-cumulative)`. At `clr == 0` the integral is
/// `hazard_risk * exposure * elapsed`; that limit is used instead of dividing
/// by zero.
///
/// # Examples
///
/// ```
/// use expo_decay::risk_multiplier;
/// let risk = risk_multiplier(1e7, 0.0, 3.0, 1e-9, 1.0);
/// assert!(risk > 0.0 && risk < 0.01);
/// assert_eq!(risk_multiplier(1e7, 2.0, 2.0, 1e-9, 1.0), 0.0);
/// ```
pub fn risk_multiplier(
    exposure: f64,
    start_time: f64,
    final_day: f64,
    hazard_risk: f64,
    clr: f64,
) -> f64 {
    let elapsed = final_day - start_time;
    let cumulative = if clr == 0.0 {
        hazard_risk * exposure * elapsed
    } else {
        // (1 - exp(-clr * elapsed)) / clr tends to elapsed as clr -> 0; divide
        // it first so a subnormal clr cannot overflow hazard_risk / clr
        let cleared = -(-clr * elapsed).exp_m1() / clr;
        hazard_risk * exposure * cleared
    };
    -(-cumulative).exp_m1()
}
