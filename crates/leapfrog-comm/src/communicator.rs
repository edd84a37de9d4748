//! Per-worker endpoint: tagged point-to-point messaging, barrier, abort.
//!
//! Every worker owns exactly one [`Communicator`]. It holds the sending
//! half of every peer's mailbox and the receiving half of its own. Messages
//! that arrive before anyone asks for them are parked in a local pending
//! queue, so matching by `(source, tag)` is independent of arrival order
//! while staying FIFO per `(source, tag)` pair.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use tracing::{trace, warn};

use crate::config::GroupConfig;
use crate::error::CommError;
use crate::message::{Body, Envelope, Payload, Tag};
use crate::request::{Kind, Request};

/// A worker's endpoint into its group.
pub struct Communicator {
    rank: usize,
    mailboxes: Arc<[Sender<Envelope>]>,
    inbox: Receiver<Envelope>,
    pending: VecDeque<Envelope>,
    barrier_epoch: u64,
    aborted_by: Option<usize>,
    config: GroupConfig,
    clock_origin: Instant,
}

impl Communicator {
    pub(crate) fn new(
        rank: usize,
        mailboxes: Arc<[Sender<Envelope>]>,
        inbox: Receiver<Envelope>,
        config: GroupConfig,
        clock_origin: Instant,
    ) -> Self {
        Self {
            rank,
            mailboxes,
            inbox,
            pending: VecDeque::new(),
            barrier_epoch: 0,
            aborted_by: None,
            config,
            clock_origin,
        }
    }

    /// This worker's rank.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Number of workers in the group.
    pub fn size(&self) -> usize {
        self.mailboxes.len()
    }

    /// Seconds elapsed on the group's shared monotonic clock.
    pub fn wtime(&self) -> f64 {
        self.clock_origin.elapsed().as_secs_f64()
    }

    /// Post a send of `data` to `dest`.
    ///
    /// The payload is copied at post time, so `data` may be reused
    /// immediately. The returned request is already complete.
    pub fn isend(&mut self, dest: usize, tag: Tag, data: &[f64]) -> Result<Request, CommError> {
        self.check_alive()?;
        self.check_rank(dest)?;
        trace!(rank = self.rank, dest, tag, len = data.len(), "isend");
        self.post(
            dest,
            Body::Data {
                tag,
                payload: Payload::from_slice(data),
            },
        )?;
        Ok(Request::send())
    }

    /// Post a receive for the next message from `source` carrying `tag`.
    pub fn irecv(&mut self, source: usize, tag: Tag) -> Result<Request, CommError> {
        self.check_alive()?;
        self.check_rank(source)?;
        trace!(rank = self.rank, source, tag, "irecv");
        Ok(Request::recv(source, tag))
    }

    /// Block until `request` completes.
    pub fn wait(&mut self, request: &mut Request) -> Result<(), CommError> {
        if request.is_complete() {
            return Ok(());
        }
        match request.kind() {
            Kind::Recv { source, tag } => {
                let envelope = self.next_matching(|e| e.is_data(source, tag))?;
                if let Body::Data { payload, .. } = envelope.body {
                    request.fulfil(payload);
                }
                Ok(())
            }
            Kind::Send | Kind::Null => Ok(()),
        }
    }

    /// Block until every request in `requests` completes.
    pub fn wait_all(&mut self, requests: &mut [Request]) -> Result<(), CommError> {
        for request in requests.iter_mut() {
            self.wait(request)?;
        }
        Ok(())
    }

    /// Block until every worker in the group has entered the barrier.
    ///
    /// Rank 0 collects one arrival per peer, then releases them all.
    pub fn barrier(&mut self) -> Result<(), CommError> {
        self.check_alive()?;
        let epoch = self.barrier_epoch;
        self.barrier_epoch += 1;
        if self.size() == 1 {
            return Ok(());
        }
        if self.rank == 0 {
            for _ in 1..self.size() {
                self.next_matching(
                    |e| matches!(e.body, Body::BarrierArrive { epoch: ep } if ep == epoch),
                )?;
            }
            for peer in 1..self.size() {
                self.post(peer, Body::BarrierRelease { epoch })?;
            }
        } else {
            self.post(0, Body::BarrierArrive { epoch })?;
            self.next_matching(|e| {
                e.source == 0 && matches!(e.body, Body::BarrierRelease { epoch: ep } if ep == epoch)
            })?;
        }
        trace!(rank = self.rank, epoch, "barrier passed");
        Ok(())
    }

    /// Abort the whole group.
    ///
    /// Every other worker's next (or current) blocking wait returns
    /// [`CommError::Aborted`]. This endpoint is unusable afterwards.
    pub fn abort(&mut self) {
        if self.aborted_by.is_none() {
            self.aborted_by = Some(self.rank);
            self.abort_handle().abort();
        }
    }

    /// A detached handle that can abort the group without owning this
    /// communicator.
    pub fn abort_handle(&self) -> AbortHandle {
        AbortHandle {
            origin: self.rank,
            mailboxes: Arc::clone(&self.mailboxes),
        }
    }

    fn check_rank(&self, rank: usize) -> Result<(), CommError> {
        if rank < self.size() {
            Ok(())
        } else {
            Err(CommError::InvalidRank {
                rank,
                size: self.size(),
            })
        }
    }

    fn check_alive(&self) -> Result<(), CommError> {
        match self.aborted_by {
            Some(origin) => Err(CommError::Aborted { origin }),
            None => Ok(()),
        }
    }

    fn post(&mut self, dest: usize, body: Body) -> Result<(), CommError> {
        let sent = self.mailboxes[dest].send(Envelope {
            source: self.rank,
            body,
        });
        if sent.is_err() {
            // A peer that exited after aborting leaves its notice behind.
            self.drain_for_abort()?;
            return Err(CommError::Disconnected { peer: dest });
        }
        Ok(())
    }

    /// Move everything already delivered into `pending`, failing if an
    /// abort notice is among it.
    fn drain_for_abort(&mut self) -> Result<(), CommError> {
        while let Ok(envelope) = self.inbox.try_recv() {
            if let Body::Abort = envelope.body {
                self.aborted_by = Some(envelope.source);
                return Err(CommError::Aborted {
                    origin: envelope.source,
                });
            }
            self.pending.push_back(envelope);
        }
        Ok(())
    }

    /// Next envelope satisfying `accept`, parking everything else.
    fn next_matching(
        &mut self,
        accept: impl Fn(&Envelope) -> bool,
    ) -> Result<Envelope, CommError> {
        self.check_alive()?;
        if let Some(pos) = self.pending.iter().position(&accept) {
            if let Some(envelope) = self.pending.remove(pos) {
                return Ok(envelope);
            }
        }
        loop {
            let envelope = self.receive()?;
            if let Body::Abort = envelope.body {
                warn!(rank = self.rank, origin = envelope.source, "worker group aborted");
                self.aborted_by = Some(envelope.source);
                return Err(CommError::Aborted {
                    origin: envelope.source,
                });
            }
            if accept(&envelope) {
                return Ok(envelope);
            }
            self.pending.push_back(envelope);
        }
    }

    fn receive(&self) -> Result<Envelope, CommError> {
        match self.config.recv_timeout {
            None => self
                .inbox
                .recv()
                .map_err(|_| CommError::InboxClosed { rank: self.rank }),
            Some(waited) => self.inbox.recv_timeout(waited).map_err(|e| match e {
                RecvTimeoutError::Timeout => CommError::Timeout {
                    rank: self.rank,
                    waited,
                },
                RecvTimeoutError::Disconnected => CommError::InboxClosed { rank: self.rank },
            }),
        }
    }
}

impl Drop for Communicator {
    fn drop(&mut self) {
        // A worker unwinding mid-protocol would leave its peers blocked.
        if std::thread::panicking() && self.aborted_by.is_none() {
            self.abort();
        }
    }
}

impl std::fmt::Debug for Communicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Communicator")
            .field("rank", &self.rank)
            .field("size", &self.size())
            .field("pending", &self.pending.len())
            .field("aborted_by", &self.aborted_by)
            .finish()
    }
}

/// Aborts a group from outside any worker's communicator.
#[derive(Clone)]
pub struct AbortHandle {
    origin: usize,
    mailboxes: Arc<[Sender<Envelope>]>,
}

impl AbortHandle {
    /// Deliver an abort notice to every other worker. Workers that have
    /// already exited are skipped.
    pub fn abort(&self) {
        warn!(origin = self.origin, "aborting worker group");
        for (rank, mailbox) in self.mailboxes.iter().enumerate() {
            if rank != self.origin {
                let _ = mailbox.send(Envelope {
                    source: self.origin,
                    body: Body::Abort,
                });
            }
        }
    }
}

impl std::fmt::Debug for AbortHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AbortHandle")
            .field("origin", &self.origin)
            .finish()
    }
}
