//! Concurrent callers with independent generators.
//!
//! Each thread owns its random source, so results depend only on the seed
//! a history was run with, never on scheduling.

use std::thread;

use expo_core::constants::NO_INFECTION_SENTINEL;
use expo_core::params::SimulationParams;
use expo_core::types::InfectionOutcome;
use expo_sim::{seeded_rng, simulate_infection_time_thread_rng, Simulator};
use expo_tests::helpers::{init_tracing, REFERENCE_EXPOSURES, REFERENCE_TIMES};

const THREADS: u64 = 8;
const PER_THREAD: u64 = 500;

fn run_seeds(sim: &Simulator, seeds: std::ops::Range<u64>) -> Vec<InfectionOutcome> {
    seeds
        .map(|seed| {
            sim.run(&REFERENCE_EXPOSURES, &REFERENCE_TIMES, &mut seeded_rng(seed))
                .unwrap()
        })
        .collect()
}

#[test]
fn threaded_seeded_runs_match_sequential() {
    init_tracing();
    let sim = Simulator::new(SimulationParams::default()).unwrap();

    let sequential = run_seeds(&sim, 0..THREADS * PER_THREAD);

    let threaded: Vec<InfectionOutcome> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let sim = &sim;
                s.spawn(move || run_seeds(sim, t * PER_THREAD..(t + 1) * PER_THREAD))
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(sequential, threaded);
}

#[test]
fn thread_local_generators_produce_valid_results() {
    let results: Vec<f64> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    (0..PER_THREAD)
                        .map(|_| {
                            simulate_infection_time_thread_rng(
                                &REFERENCE_EXPOSURES,
                                &REFERENCE_TIMES,
                                1.0,
                                1e-9,
                                1.0,
                            )
                            .unwrap()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(results.len() as u64, THREADS * PER_THREAD);
    for t in &results {
        assert!(*t == NO_INFECTION_SENTINEL || *t == 2.0 || *t == 3.0, "t = {t}");
    }
    // ~47% infect in the second interval; all-sentinel would mean the
    // generators were not drawing.
    assert!(results.iter().any(|&t| t == 3.0));
}
