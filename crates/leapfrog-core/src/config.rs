//! Solver configuration and validation.
//!
//! [`SolverConfig`] is the single input describing a run: mesh size, step
//! count and the physical constants of the transport equation. It is
//! validated once at startup and turned into immutable [`SchemeParams`].

use crate::error::ConfigError;
use crate::params::SchemeParams;

/// Configuration of one solver run.
///
/// Defaults reproduce the reference problem: `M = K = 1000` on the unit
/// square with unit transport speed.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Number of spatial cells `M`. The grid has `M + 1` points.
    pub cells: usize,
    /// Number of time steps `K`.
    pub steps: usize,
    /// Transport speed `a`.
    pub speed: f64,
    /// Domain length `X`.
    pub length: f64,
    /// Total simulated time `T`.
    pub duration: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            cells: 1000,
            steps: 1000,
            speed: 1.0,
            length: 1.0,
            duration: 1.0,
        }
    }
}

impl SolverConfig {
    /// Configuration with the given mesh and the default physical constants.
    pub fn with_mesh(cells: usize, steps: usize) -> Self {
        Self {
            cells,
            steps,
            ..Self::default()
        }
    }

    /// Check structural invariants.
    ///
    /// Does not look at the Courant ratio; see [`SchemeParams::stability`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cells == 0 {
            return Err(ConfigError::NoCells);
        }
        if self.steps == 0 {
            return Err(ConfigError::NoSteps);
        }
        for (name, value) in [("length", self.length), ("duration", self.duration)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidExtent { name, value });
            }
        }
        if !self.speed.is_finite() {
            return Err(ConfigError::InvalidSpeed { value: self.speed });
        }
        Ok(())
    }

    /// Validate and derive the scheme parameters.
    pub fn params(&self) -> Result<SchemeParams, ConfigError> {
        self.validate()?;
        Ok(SchemeParams::derive(self))
    }
}
