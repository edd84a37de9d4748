//! Group bootstrap: mailbox wiring and one thread per rank.

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender};
use tracing::debug;

use crate::communicator::Communicator;
use crate::config::GroupConfig;
use crate::error::CommError;
use crate::message::Envelope;

/// Create `size` connected communicators, indexed by rank.
///
/// Useful when the caller manages its own threads; [`launch`] covers the
/// common case.
pub fn create_group(size: usize, config: GroupConfig) -> Result<Vec<Communicator>, CommError> {
    if size == 0 {
        return Err(CommError::EmptyGroup);
    }
    let (senders, receivers): (Vec<Sender<Envelope>>, Vec<Receiver<Envelope>>) =
        (0..size).map(|_| crossbeam_channel::unbounded()).unzip();
    let mailboxes: Arc<[Sender<Envelope>]> = senders.into();
    let origin = Instant::now();
    Ok(receivers
        .into_iter()
        .enumerate()
        .map(|(rank, inbox)| {
            Communicator::new(rank, Arc::clone(&mailboxes), inbox, config.clone(), origin)
        })
        .collect())
}

/// Run `body` once per rank, each on its own named thread, and collect the
/// results in rank order.
///
/// `body` may borrow from the caller's stack; all workers are joined before
/// `launch` returns. If a worker panics its communicator aborts the group,
/// so the remaining workers unblock, and `launch` reports
/// [`CommError::WorkerPanicked`] for the lowest panicked rank.
pub fn launch<T, F>(size: usize, config: GroupConfig, body: F) -> Result<Vec<T>, CommError>
where
    T: Send,
    F: Fn(&mut Communicator) -> T + Sync,
{
    let comms = create_group(size, config)?;
    let body = &body;
    debug!(size, "launching worker group");

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(size);
        let mut spawn_error = None;
        for mut comm in comms {
            let rank = comm.rank();
            let abort = comm.abort_handle();
            let spawned = thread::Builder::new()
                .name(format!("leapfrog-rank-{rank}"))
                .spawn_scoped(scope, move || body(&mut comm));
            match spawned {
                Ok(handle) => handles.push((rank, handle)),
                Err(e) => {
                    // Peers already running would wait forever for this rank.
                    abort.abort();
                    spawn_error = Some(CommError::ThreadSpawnFailed {
                        rank,
                        reason: e.to_string(),
                    });
                    break;
                }
            }
        }

        let mut results = Vec::with_capacity(size);
        let mut panicked = None;
        for (rank, handle) in handles {
            match handle.join() {
                Ok(value) => results.push(value),
                Err(_) => {
                    panicked.get_or_insert(CommError::WorkerPanicked { rank });
                }
            }
        }
        if let Some(err) = spawn_error.or(panicked) {
            return Err(err);
        }
        Ok(results)
    })
}
