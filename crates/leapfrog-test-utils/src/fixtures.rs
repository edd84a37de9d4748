//! Reusable problem definitions.
//!
//! - [`PulsedInflow`]: zero initial data, oscillating inflow. Exercises the
//!   left boundary at every step.
//! - [`ConstantSource`]: sine initial data with a constant forcing term.
//! - [`Parabola`]: `x (1 - x)`, zero at both edges, no inflow or source.

use std::f64::consts::PI;

use leapfrog_core::Problem;

/// Zero initial data with inflow `psi(t) = amplitude * sin(2 pi t / period)`.
#[derive(Clone, Copy, Debug)]
pub struct PulsedInflow {
    pub amplitude: f64,
    pub period: f64,
}

impl Default for PulsedInflow {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            period: 0.5,
        }
    }
}

impl Problem for PulsedInflow {
    fn initial(&self, _x: f64) -> f64 {
        0.0
    }

    fn inflow(&self, t: f64) -> f64 {
        self.amplitude * (2.0 * PI * t / self.period).sin()
    }

    fn source(&self, _t: f64, _x: f64) -> f64 {
        0.0
    }
}

/// `phi(x) = sin(pi x)`, `psi = 0`, `f = value`.
#[derive(Clone, Copy, Debug)]
pub struct ConstantSource {
    pub value: f64,
}

impl Problem for ConstantSource {
    fn initial(&self, x: f64) -> f64 {
        (PI * x).sin()
    }

    fn inflow(&self, _t: f64) -> f64 {
        0.0
    }

    fn source(&self, _t: f64, _x: f64) -> f64 {
        self.value
    }
}

/// `phi(x) = x (1 - x)`, `psi = 0`, `f = 0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Parabola;

impl Problem for Parabola {
    fn initial(&self, x: f64) -> f64 {
        x * (1.0 - x)
    }

    fn inflow(&self, _t: f64) -> f64 {
        0.0
    }

    fn source(&self, _t: f64, _x: f64) -> f64 {
        0.0
    }
}
