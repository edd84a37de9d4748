//! Wire envelope exchanged between communicators.

use smallvec::SmallVec;

/// Message tag used to match sends with receives from the same source.
pub type Tag = i32;

/// Message body. Halo traffic is one value per message, so short payloads
/// stay inline.
pub type Payload = SmallVec<[f64; 4]>;

pub(crate) enum Body {
    Data { tag: Tag, payload: Payload },
    BarrierArrive { epoch: u64 },
    BarrierRelease { epoch: u64 },
    Abort,
}

pub(crate) struct Envelope {
    pub source: usize,
    pub body: Body,
}

impl Envelope {
    pub fn is_data(&self, source: usize, tag: Tag) -> bool {
        self.source == source && matches!(self.body, Body::Data { tag: t, .. } if t == tag)
    }
}
