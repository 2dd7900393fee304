//! Shared test helpers for integration tests.

use std::sync::Once;

use expo_core::types::InfectionOutcome;
use expo_decay::engine::ClearanceModel;
use expo_sim::{seeded_rng, Simulator};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
///
/// Honours `RUST_LOG`; defaults to `warn` so the per-interval trace events
/// stay quiet unless asked for.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
            .with_test_writer()
            .try_init();
    });
}

/// Exposures from the reference worked example.
pub const REFERENCE_EXPOSURES: [f64; 3] = [1e7, 1e9, 0.0];

/// Unit-spaced time points `0, 1, 2, 3`.
pub const REFERENCE_TIMES: [f64; 4] = [0.0, 1.0, 2.0, 3.0];

/// `n + 1` evenly spaced time points starting at zero.
pub fn even_times(n: usize, step: f64) -> Vec<f64> {
    (0..=n).map(|i| i as f64 * step).collect()
}

/// Run `trials` seeded histories and count how many ended in each interval.
///
/// Returns `(per_interval_counts, not_infected)`. Trial `k` uses seed
/// `base_seed + k`.
pub fn tally_outcomes(
    sim: &Simulator<ClearanceModel>,
    exposures: &[f64],
    times: &[f64],
    trials: u64,
    base_seed: u64,
) -> (Vec<u64>, u64) {
    let mut counts = vec![0u64; exposures.len()];
    let mut not_infected = 0;
    for k in 0..trials {
        let mut rng = seeded_rng(base_seed.wrapping_add(k));
        match sim.run(exposures, times, &mut rng).unwrap() {
            InfectionOutcome::Infected { interval, .. } => counts[interval] += 1,
            InfectionOutcome::NotInfected => not_infected += 1,
        }
    }
    (counts, not_infected)
}
