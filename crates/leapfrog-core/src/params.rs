//! Derived scheme parameters and the Courant stability check.

use std::fmt;

use crate::config::SolverConfig;

/// Immutable discretization constants shared by every worker.
///
/// Derived once from a validated [`SolverConfig`]:
/// `h = X / M`, `tau = T / K`, `lambda = a * tau / h`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SchemeParams {
    /// Number of spatial cells `M`.
    pub cells: usize,
    /// Number of time steps `K`.
    pub steps: usize,
    /// Transport speed `a`.
    pub speed: f64,
    /// Space step `h`.
    pub h: f64,
    /// Time step `tau`.
    pub tau: f64,
    /// Courant ratio `lambda`.
    pub lambda: f64,
}

impl SchemeParams {
    /// Derive parameters from a configuration.
    ///
    /// Callers are expected to have validated `config`; use
    /// [`SolverConfig::params`] for the checked path.
    pub(crate) fn derive(config: &SolverConfig) -> Self {
        let h = config.length / config.cells as f64;
        let tau = config.duration / config.steps as f64;
        Self {
            cells: config.cells,
            steps: config.steps,
            speed: config.speed,
            h,
            tau,
            lambda: config.speed * tau / h,
        }
    }

    /// Number of grid points, `M + 1`.
    pub fn point_count(&self) -> usize {
        self.cells + 1
    }

    /// Global index of the right domain edge, `M`.
    pub fn last_index(&self) -> usize {
        self.cells
    }

    /// Spatial coordinate of a global grid index.
    pub fn x(&self, global_index: usize) -> f64 {
        global_index as f64 * self.h
    }

    /// Time of level `k`.
    pub fn t(&self, k: usize) -> f64 {
        k as f64 * self.tau
    }

    /// Courant check. Returns a warning when `|lambda| > 1`.
    ///
    /// The run proceeds either way; the scheme may simply grow error.
    pub fn stability(&self) -> Option<CourantWarning> {
        if self.lambda.abs() > 1.0 {
            Some(CourantWarning {
                lambda: self.lambda,
            })
        } else {
            None
        }
    }
}

/// The Courant condition `|lambda| <= 1` does not hold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CourantWarning {
    /// The offending ratio.
    pub lambda: f64,
}

impl fmt::Display for CourantWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Courant condition violated: lambda={:.3} > 1, the scheme may be unstable",
            self.lambda
        )
    }
}
