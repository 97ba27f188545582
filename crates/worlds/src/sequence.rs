use crate::world::{WorldError, splitmix64};
use algospace_common::WorldId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An event record produced by every mutation to a sequence world.
///
/// The event log is the foundation for step-by-step replay and undo in the
/// rendering layer. Each event captures enough information to reconstruct or
/// reverse the mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceEvent {
    /// Element at `index` was overwritten.
    Written { index: usize, old: u32, new: u32 },
    /// Elements at `i` and `j` were exchanged.
    Swapped { i: usize, j: usize },
}

/// Counters over the operations learner code performed on a world.
///
/// The performance tier grades against these rather than wall-clock time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpCounters {
    pub reads: u64,
    pub writes: u64,
    pub swaps: u64,
    pub comparisons: u64,
}

/// A world of orderable elements, used by the sorting exercise family.
///
/// Holds a permutation of `1..=size`. The harness validates completion by
/// checking the elements are ascending at termination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceWorld {
    id: WorldId,
    label: String,
    values: Vec<u32>,
    /// The post-construction permutation, kept for `reset()`.
    initial: Vec<u32>,
    counters: OpCounters,
    /// Append-only log of all mutations.
    #[serde(skip)]
    event_log: Vec<SequenceEvent>,
}

impl SequenceWorld {
    /// Create a sequence world with `size` elements in a deterministic
    /// initial permutation derived from the size.
    pub fn new(label: impl Into<String>, size: usize) -> Result<Self, WorldError> {
        Self::with_seed(label, size, size as u64)
    }

    /// Create a sequence world shuffled from an explicit seed. Same seed,
    /// same permutation.
    pub fn with_seed(
        label: impl Into<String>,
        size: usize,
        seed: u64,
    ) -> Result<Self, WorldError> {
        if size == 0 {
            return Err(WorldError::InvalidSize { size });
        }
        let mut values: Vec<u32> = (1..=size as u32).collect();
        // Fisher-Yates driven by splitmix64. The shuffle is construction,
        // not learner mutation, so it does not log events.
        let mut state = seed;
        for i in (1..values.len()).rev() {
            state = splitmix64(state);
            let j = (state % (i as u64 + 1)) as usize;
            values.swap(i, j);
        }
        Ok(Self {
            id: WorldId::new(),
            label: label.into(),
            initial: values.clone(),
            values,
            counters: OpCounters::default(),
            event_log: Vec::new(),
        })
    }

    pub fn id(&self) -> WorldId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view of the current elements.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Operation counters accumulated since construction or the last reset.
    pub fn counters(&self) -> OpCounters {
        self.counters
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[SequenceEvent] {
        &self.event_log
    }

    /// Drain and return the event log. Used by the replay renderer.
    pub fn drain_events(&mut self) -> Vec<SequenceEvent> {
        std::mem::take(&mut self.event_log)
    }

    fn check_index(&self, index: usize) -> Result<(), WorldError> {
        if index >= self.values.len() {
            return Err(WorldError::IndexOutOfBounds {
                index,
                len: self.values.len(),
            });
        }
        Ok(())
    }

    /// Read the element at `index`. Counted as a read access.
    pub fn get(&mut self, index: usize) -> Result<u32, WorldError> {
        self.check_index(index)?;
        self.counters.reads += 1;
        Ok(self.values[index])
    }

    /// Overwrite the element at `index` and log the change.
    pub fn set(&mut self, index: usize, value: u32) -> Result<(), WorldError> {
        self.check_index(index)?;
        let old = self.values[index];
        self.values[index] = value;
        self.counters.writes += 1;
        self.event_log.push(SequenceEvent::Written {
            index,
            old,
            new: value,
        });
        Ok(())
    }

    /// Exchange the elements at `i` and `j` and log the change.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), WorldError> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.values.swap(i, j);
        self.counters.swaps += 1;
        self.event_log.push(SequenceEvent::Swapped { i, j });
        Ok(())
    }

    /// Compare the elements at `i` and `j`. Counted as a comparison.
    pub fn compare(&mut self, i: usize, j: usize) -> Result<Ordering, WorldError> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.counters.comparisons += 1;
        Ok(self.values[i].cmp(&self.values[j]))
    }

    /// True when the elements are in ascending order.
    pub fn is_solved(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    /// True when the elements are still a permutation of `1..=len`.
    ///
    /// `swap` preserves this; `set` can break it, and the harness treats a
    /// broken permutation as an unsolved world even if it sorts ascending.
    pub fn is_permutation(&self) -> bool {
        let mut sorted = self.values.clone();
        sorted.sort_unstable();
        sorted.iter().copied().eq(1..=self.values.len() as u32)
    }

    /// Restore the initial permutation, clear the log and counters.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.counters = OpCounters::default();
        self.event_log.clear();
    }

    /// Reconstruct a final element ordering from an initial state and a
    /// recorded event sequence (for replay).
    pub fn replay(initial: &[u32], events: &[SequenceEvent]) -> Vec<u32> {
        let mut values = initial.to_vec();
        for event in events {
            match *event {
                SequenceEvent::Written { index, new, .. } => {
                    if index < values.len() {
                        values[index] = new;
                    }
                }
                SequenceEvent::Swapped { i, j } => {
                    if i < values.len() && j < values.len() {
                        values.swap(i, j);
                    }
                }
            }
        }
        values
    }
}
