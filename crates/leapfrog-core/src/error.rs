//! Error types for solver configuration.

use std::error::Error;
use std::fmt;

/// Errors detected during [`SolverConfig::validate()`](crate::SolverConfig::validate).
///
/// A Courant ratio above one is deliberately absent: it is reported as a
/// [`CourantWarning`](crate::CourantWarning), never as a configuration error.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `cells` (M) is zero, which would make the space step infinite.
    NoCells,
    /// `steps` (K) is zero, which would make the time step infinite.
    NoSteps,
    /// A physical extent is NaN, infinite, zero or negative.
    InvalidExtent {
        /// Which extent (`"length"` or `"duration"`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The transport speed is NaN or infinite.
    InvalidSpeed {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCells => write!(f, "cells (M) must be at least 1"),
            Self::NoSteps => write!(f, "steps (K) must be at least 1"),
            Self::InvalidExtent { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            Self::InvalidSpeed { value } => {
                write!(f, "transport speed must be finite, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}
