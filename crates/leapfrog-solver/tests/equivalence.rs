//! Worker-count independence: the distributed solver must reproduce the
//! serial oracle regardless of how the grid is split.

use leapfrog_comm::GroupConfig;
use leapfrog_core::{SineTransport, SolverConfig};
use leapfrog_solver::{solve_parallel, solve_serial};
use leapfrog_test_utils::fixtures::{ConstantSource, Parabola, PulsedInflow};
use leapfrog_test_utils::{assert_grids_close, half_courant, mesh, ROUNDING_TOLERANCE};
use proptest::prelude::*;

fn parallel(config: &SolverConfig, problem: &dyn leapfrog_core::Problem, workers: usize) -> Vec<f64> {
    solve_parallel(config, problem, workers, GroupConfig::default())
        .unwrap()
        .values
}

#[test]
fn one_and_four_workers_agree() {
    let config = half_courant(200);
    let one = parallel(&config, &SineTransport, 1);
    let four = parallel(&config, &SineTransport, 4);
    assert_grids_close(&four, &one, ROUNDING_TOLERANCE);
}

#[test]
fn parallel_matches_serial_oracle() {
    let config = mesh(99, 150);
    let problem = ConstantSource { value: 0.5 };
    let serial = solve_serial(&config, &problem).unwrap();
    for workers in [1, 2, 3, 7] {
        let values = parallel(&config, &problem, workers);
        assert_grids_close(&values, &serial, ROUNDING_TOLERANCE);
    }
}

#[test]
fn concrete_scenario_one_vs_two_workers() {
    // h=0.25, tau=1/3, lambda=4/3: unstable, but still deterministic.
    let config = mesh(4, 3);
    let params = config.params().unwrap();
    assert!(params.stability().is_some());

    let one = parallel(&config, &SineTransport, 1);
    let two = parallel(&config, &SineTransport, 2);
    assert_eq!(one.len(), 5);
    assert_grids_close(&two, &one, ROUNDING_TOLERANCE);
    assert_grids_close(&one, &solve_serial(&config, &SineTransport).unwrap(), ROUNDING_TOLERANCE);
}

#[test]
fn more_workers_than_points() {
    // 4 points over 7 workers: ranks 4..7 own nothing.
    let config = mesh(3, 5);
    let problem = PulsedInflow::default();
    let serial = solve_serial(&config, &problem).unwrap();
    let values = parallel(&config, &problem, 7);
    assert_grids_close(&values, &serial, ROUNDING_TOLERANCE);
}

#[test]
fn one_point_per_worker() {
    let config = mesh(5, 10);
    let serial = solve_serial(&config, &Parabola).unwrap();
    let values = parallel(&config, &Parabola, 6);
    assert_grids_close(&values, &serial, ROUNDING_TOLERANCE);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn any_split_matches_serial(
        cells in 1usize..48,
        steps in 1usize..32,
        workers in 1usize..12,
        source in -1.0f64..1.0,
    ) {
        let config = mesh(cells, steps);
        let problem = ConstantSource { value: source };
        let serial = solve_serial(&config, &problem).unwrap();
        let values = parallel(&config, &problem, workers);
        prop_assert_eq!(values.len(), cells + 1);
        for (a, e) in values.iter().zip(&serial) {
            prop_assert!((a - e).abs() <= ROUNDING_TOLERANCE * e.abs().max(1.0));
        }
    }
}
