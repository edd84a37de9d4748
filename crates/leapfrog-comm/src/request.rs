//! Handles for non-blocking operations.

use crate::message::{Payload, Tag};

/// A handle to an in-flight send or receive.
///
/// Sends are buffered and complete as soon as they are posted. A receive
/// completes when [`Communicator::wait`](crate::Communicator::wait) or
/// [`wait_all`](crate::Communicator::wait_all) matches a message for it;
/// only then is its payload available through [`take_payload`](Self::take_payload).
/// Requests addressed to no peer ([`Request::null`]) are complete from the
/// start and carry no payload.
#[must_use = "a receive request must be waited on before its payload can be read"]
#[derive(Debug)]
pub struct Request {
    kind: Kind,
    completed: bool,
    payload: Option<Payload>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    Send,
    Recv { source: usize, tag: Tag },
    Null,
}

impl Request {
    pub(crate) fn send() -> Self {
        Self {
            kind: Kind::Send,
            completed: true,
            payload: None,
        }
    }

    pub(crate) fn recv(source: usize, tag: Tag) -> Self {
        Self {
            kind: Kind::Recv { source, tag },
            completed: false,
            payload: None,
        }
    }

    /// A request with no peer. Waiting on it is a no-op.
    pub fn null() -> Self {
        Self {
            kind: Kind::Null,
            completed: true,
            payload: None,
        }
    }

    pub(crate) fn kind(&self) -> Kind {
        self.kind
    }

    pub(crate) fn fulfil(&mut self, payload: Payload) {
        self.payload = Some(payload);
        self.completed = true;
    }

    /// Whether the operation has finished.
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Take the received payload. `None` for sends, null requests, and
    /// receives that have not completed (or were already taken).
    pub fn take_payload(&mut self) -> Option<Payload> {
        self.payload.take()
    }
}
