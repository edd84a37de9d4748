//! The facade exposes everything a caller needs to run and inspect a solve.

use leapfrog::prelude::*;

#[test]
fn prelude_runs_a_custom_problem() {
    let problem = FnProblem::new(|x: f64| x * (1.0 - x), |t: f64| t, |_, _| 0.0);
    let config = SolverConfig::with_mesh(40, 80);
    let solution = solve_parallel(&config, &problem, 3, GroupConfig::default()).unwrap();
    assert_eq!(solution.values[0], config.params().unwrap().t(80));
    assert_eq!(solution.values[40], 0.0);
    assert_eq!(solution.report.cells, 40);
}

#[test]
fn unstable_ratio_is_reported_not_rejected() {
    let config = SolverConfig::with_mesh(100, 10);
    let params: SchemeParams = config.params().unwrap();
    let warning: CourantWarning = params.stability().unwrap();
    assert!(warning.to_string().contains("lambda=10.000"));
    assert!(solve_parallel(&config, &SineTransport, 2, GroupConfig::default()).is_ok());
}

#[test]
fn errors_convert_through_the_solver_error() {
    let config = SolverConfig::with_mesh(0, 10);
    match solve_parallel(&config, &SineTransport, 2, GroupConfig::default()) {
        Err(SolverError::Config(ConfigError::NoCells)) => {}
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn modules_reach_the_sub_crates() {
    let parts = leapfrog::space::partition_all(10, 3).unwrap();
    assert_eq!(parts.iter().map(|p| p.len).collect::<Vec<_>>(), vec![4, 3, 3]);
    let _: leapfrog::comm::Tag = leapfrog::solver::halo::TAG_LEFTWARD;
}
