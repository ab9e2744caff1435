use crate::engine::variables::DomainId;
use crate::engine::variables::OptionalInterval;
use crate::engine::VariableStore;

/// A task of a no-overlap constraint as seen from the current domains.
#[derive(Clone, Copy, Debug)]
pub(super) struct DisjunctiveTask {
    pub(super) start: DomainId,
    pub(super) duration: i64,
    /// The position of the task in the no-overlap constraint.
    pub(super) id: usize,
}

impl DisjunctiveTask {
    pub(super) fn new(id: usize, interval: &OptionalInterval) -> Self {
        DisjunctiveTask {
            start: interval.start,
            duration: interval.duration,
            id,
        }
    }

    pub(super) fn est(&self, store: &VariableStore) -> i64 {
        store.lower_bound(self.start)
    }

    pub(super) fn lst(&self, store: &VariableStore) -> i64 {
        store.upper_bound(self.start)
    }

    pub(super) fn ect(&self, store: &VariableStore) -> i64 {
        self.est(store) + self.duration
    }

    pub(super) fn lct(&self, store: &VariableStore) -> i64 {
        self.lst(store) + self.duration
    }
}
