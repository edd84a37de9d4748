//! Worker group configuration.

use std::time::Duration;

/// Configuration shared by every communicator in a group.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupConfig {
    /// Upper bound on any single blocking wait (receive or barrier).
    ///
    /// `None` blocks indefinitely: a peer that never sends leaves the
    /// waiter hung. `Some(d)` turns that hang into
    /// [`CommError::Timeout`](crate::CommError::Timeout).
    pub recv_timeout: Option<Duration>,
}

impl GroupConfig {
    /// Configuration with a receive timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            recv_timeout: Some(timeout),
        }
    }
}
