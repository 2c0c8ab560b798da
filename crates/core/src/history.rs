//! Bounded trailing history of vitals samples.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;
use crate::vitals::{VitalSigns, VitalStatus};

/// How many trailing samples the monitor retains.
pub const HISTORY_CAPACITY: usize = 20;

/// A vitals snapshot together with its classification and capture time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimestampedVitals {
    pub vitals: VitalSigns,
    pub status: VitalStatus,
    pub recorded_at: Timestamp,
}

/// Fixed-capacity FIFO of the most recent samples.
///
/// Pushing onto a full history evicts the oldest entry, so the length
/// never exceeds [`HISTORY_CAPACITY`].
#[derive(Debug, Default)]
pub struct VitalsHistory {
    samples: VecDeque<TimestampedVitals>,
}

impl VitalsHistory {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Append a sample, evicting the oldest if at capacity.
    pub fn push(&mut self, sample: TimestampedVitals) {
        if self.samples.len() == HISTORY_CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// The most recent sample, if any.
    pub fn latest(&self) -> Option<&TimestampedVitals> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All retained samples, oldest first.
    pub fn snapshot(&self) -> Vec<TimestampedVitals> {
        self.samples.iter().copied().collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
