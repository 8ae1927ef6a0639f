//! Trace storage for step-indexed playback
//!
//! A [`Trace`] is the complete, ordered sequence of snapshots produced by
//! running an algorithm to completion. It is built once by a generator in
//! [`crate::algorithms`] and never mutated afterwards; the playback
//! controller only ever reads from it by index. Each snapshot is
//! self-contained (a full state, not a delta), so seeking directly to any
//! index renders exactly what monotonic replay up to that index would.

/// An immutable, ordered sequence of algorithm snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace<S> {
    steps: Vec<S>,
}

impl<S> Trace<S> {
    /// Build a trace from the steps a generator produced, in execution order.
    pub fn new(steps: Vec<S>) -> Self {
        Trace { steps }
    }

    /// Get a snapshot by index.
    pub fn get(&self, index: usize) -> Option<&S> {
        self.steps.get(index)
    }

    /// The terminal snapshot, if the trace is non-empty.
    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    /// Number of snapshots in the trace.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over the snapshots in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.steps.iter()
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
