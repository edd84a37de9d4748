//! The transport problem: `du/dt + a du/dx = f(t, x)`.
//!
//! A [`Problem`] supplies the initial condition `phi`, the inflow boundary
//! `psi` at `x = 0` and the source term `f`. The outflow boundary at `x = X`
//! is always the homogeneous Dirichlet value `0`.

use std::f64::consts::PI;

/// Initial, boundary and source data for the transport equation.
///
/// Shared read-only across worker threads, hence `Send + Sync`.
pub trait Problem: Send + Sync {
    /// Initial condition `phi(x)` at `t = 0`.
    fn initial(&self, x: f64) -> f64;

    /// Inflow boundary condition `psi(t)` at `x = 0`.
    fn inflow(&self, t: f64) -> f64;

    /// Source term `f(t, x)`.
    fn source(&self, t: f64, x: f64) -> f64;
}

/// The reference problem: a half sine wave transported out of the domain.
///
/// `phi(x) = sin(pi x)`, `psi(t) = 0`, `f = 0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SineTransport;

impl Problem for SineTransport {
    fn initial(&self, x: f64) -> f64 {
        (PI * x).sin()
    }

    fn inflow(&self, _t: f64) -> f64 {
        0.0
    }

    fn source(&self, _t: f64, _x: f64) -> f64 {
        0.0
    }
}

/// A problem assembled from three closures.
///
/// ```
/// use leapfrog_core::{FnProblem, Problem};
///
/// let p = FnProblem::new(|x| x * x, |t| t, |_t, _x| 1.0);
/// assert_eq!(p.initial(2.0), 4.0);
/// assert_eq!(p.inflow(0.5), 0.5);
/// assert_eq!(p.source(0.0, 0.0), 1.0);
/// ```
pub struct FnProblem<I, B, S> {
    initial: I,
    inflow: B,
    source: S,
}

impl<I, B, S> FnProblem<I, B, S>
where
    I: Fn(f64) -> f64 + Send + Sync,
    B: Fn(f64) -> f64 + Send + Sync,
    S: Fn(f64, f64) -> f64 + Send + Sync,
{
    /// Build a problem from `phi`, `psi` and `f`.
    pub fn new(initial: I, inflow: B, source: S) -> Self {
        Self {
            initial,
            inflow,
            source,
        }
    }
}

impl<I, B, S> Problem for FnProblem<I, B, S>
where
    I: Fn(f64) -> f64 + Send + Sync,
    B: Fn(f64) -> f64 + Send + Sync,
    S: Fn(f64, f64) -> f64 + Send + Sync,
{
    fn initial(&self, x: f64) -> f64 {
        (self.initial)(x)
    }

    fn inflow(&self, t: f64) -> f64 {
        (self.inflow)(t)
    }

    fn source(&self, t: f64, x: f64) -> f64 {
        (self.source)(t, x)
    }
}
