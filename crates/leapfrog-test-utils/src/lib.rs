//! Test fixtures and tolerance helpers for leapfrog development.
//!
//! Problem fixtures live in [`fixtures`]; this module holds configuration
//! shorthands and comparisons of whole grids.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use leapfrog_core::SolverConfig;

/// Tolerance for comparing runs that should agree up to rounding.
pub const ROUNDING_TOLERANCE: f64 = 1e-9;

/// Default constants with the given mesh.
pub fn mesh(cells: usize, steps: usize) -> SolverConfig {
    SolverConfig::with_mesh(cells, steps)
}

/// A mesh with Courant ratio exactly `0.5` (`K = 2M`, `a = X = T = 1`).
pub fn half_courant(cells: usize) -> SolverConfig {
    SolverConfig::with_mesh(cells, 2 * cells)
}

/// A mesh with transport speed zero.
pub fn frozen(cells: usize, steps: usize) -> SolverConfig {
    SolverConfig {
        speed: 0.0,
        ..SolverConfig::with_mesh(cells, steps)
    }
}

/// Assert two grids agree within `tol` at every index, naming the first
/// offending index.
pub fn assert_grids_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "grids differ in length: {} vs {}",
        actual.len(),
        expected.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "index {i}: {a} vs {e} (tolerance {tol})"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_courant_ratio() {
        let p = half_courant(40).params().unwrap();
        assert!((p.lambda - 0.5).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "index 1")]
    fn assert_grids_close_reports_index() {
        assert_grids_close(&[0.0, 1.0], &[0.0, 1.1], 1e-3);
    }
}
