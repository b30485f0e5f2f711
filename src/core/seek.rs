//! Seek-time accounting shared by every scheduling policy.
//!
//! Policies only decide *where* the head goes next. Walking the resulting
//! sequence and charging `|to - from|` per movement happens here, once.

use serde::{Deserialize, Serialize};

use super::geometry::Track;

/// One head movement from `from` to `to`.
///
/// Serialized as a `[from, to]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(Track, Track)", into = "(Track, Track)")]
pub struct SeekOperation {
    pub from: Track,
    pub to: Track,
}

impl SeekOperation {
    pub fn new(from: Track, to: Track) -> Self {
        Self { from, to }
    }

    /// Seek distance (absolute track difference).
    pub fn distance(&self) -> u64 {
        self.from.abs_diff(self.to)
    }
}

impl From<(Track, Track)> for SeekOperation {
    fn from((from, to): (Track, Track)) -> Self {
        Self::new(from, to)
    }
}

impl From<SeekOperation> for (Track, Track) {
    fn from(op: SeekOperation) -> Self {
        (op.from, op.to)
    }
}

/// Total seek distance and the movements that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeekAccount {
    /// Sum of all movement distances.
    ///
    /// Wider than a single distance so that many near full-disk seeks
    /// cannot overflow.
    pub total: u128,
    /// Movements in visitation order; each `to` is the next `from`.
    pub operations: Vec<SeekOperation>,
}

impl SeekAccount {
    /// Walk `sequence` starting from `start`, charging every movement.
    ///
    /// An empty sequence yields a zero total and no operations.
    pub fn walk(start: Track, sequence: &[Track]) -> Self {
        let mut operations = Vec::with_capacity(sequence.len());
        let mut total = 0u128;
        let mut head = start;

        for &track in sequence {
            let op = SeekOperation::new(head, track);
            total += u128::from(op.distance());
            operations.push(op);
            head = track;
        }

        Self { total, operations }
    }

    /// Average distance per movement, or `0.0` with no movements.
    pub fn average(&self) -> f64 {
        if self.operations.is_empty() {
            0.0
        } else {
            self.total as f64 / self.operations.len() as f64
        }
    }
}
