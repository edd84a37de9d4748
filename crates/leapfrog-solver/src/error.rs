//! Solver error type.

use std::error::Error;
use std::fmt;

use leapfrog_comm::CommError;
use leapfrog_core::ConfigError;
use leapfrog_space::SpaceError;

/// Errors surfaced by a worker or by a whole run.
#[derive(Clone, Debug, PartialEq)]
pub enum SolverError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// Partitioning or topology lookup failed.
    Space(SpaceError),
    /// Messaging failed, including a group abort.
    Comm(CommError),
    /// A time-level buffer could not be allocated. Fatal for the group.
    AllocationFailed {
        /// Worker that failed.
        rank: usize,
        /// Requested buffer length in values.
        len: usize,
    },
    /// A neighbour sent a halo message without a value.
    EmptyHalo {
        /// Receiving worker.
        rank: usize,
    },
}

impl SolverError {
    /// Whether this error only reports that another worker aborted.
    pub fn is_abort(&self) -> bool {
        matches!(self, Self::Comm(CommError::Aborted { .. }))
    }
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Space(e) => write!(f, "decomposition: {e}"),
            Self::Comm(e) => write!(f, "communication: {e}"),
            Self::AllocationFailed { rank, len } => {
                write!(f, "rank {rank}: failed to allocate time level of {len} values")
            }
            Self::EmptyHalo { rank } => write!(f, "rank {rank}: received an empty halo message"),
        }
    }
}

impl Error for SolverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Space(e) => Some(e),
            Self::Comm(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SolverError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SpaceError> for SolverError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<CommError> for SolverError {
    fn from(e: CommError) -> Self {
        Self::Comm(e)
    }
}
