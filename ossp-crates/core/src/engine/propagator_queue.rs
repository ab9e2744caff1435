use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::collections::VecDeque;

use fnv::FnvHashSet;

use crate::constraints::ConstraintId;
use crate::ossp_assert_moderate;

/// FIFO queues of constraints waiting to be propagated, one per priority level. A constraint is
/// in the queue at most once.
#[derive(Debug)]
pub(crate) struct PropagatorQueue {
    queues: Vec<VecDeque<ConstraintId>>,
    present_propagators: FnvHashSet<ConstraintId>,
    present_priorities: BinaryHeap<Reverse<u32>>,
}

impl PropagatorQueue {
    pub(crate) fn new(num_priority_levels: u32) -> PropagatorQueue {
        PropagatorQueue {
            queues: vec![VecDeque::new(); num_priority_levels as usize],
            present_propagators: FnvHashSet::default(),
            present_priorities: BinaryHeap::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.present_propagators.is_empty()
    }

    pub(crate) fn enqueue_propagator(&mut self, constraint_id: ConstraintId, priority: u32) {
        ossp_assert_moderate!((priority as usize) < self.queues.len());

        if !self.is_propagator_enqueued(constraint_id) {
            if self.queues[priority as usize].is_empty() {
                self.present_priorities.push(Reverse(priority));
            }
            self.queues[priority as usize].push_back(constraint_id);
            let _ = self.present_propagators.insert(constraint_id);
        }
    }

    /// Removes the oldest entry of the most urgent non-empty priority level.
    pub(crate) fn pop(&mut self) -> Option<ConstraintId> {
        let top_priority = self.present_priorities.peek()?.0 as usize;
        ossp_assert_moderate!(!self.queues[top_priority].is_empty());

        let next_constraint_id = self.queues[top_priority].pop_front()?;

        let _ = self.present_propagators.remove(&next_constraint_id);

        if self.queues[top_priority].is_empty() {
            let _ = self.present_priorities.pop();
        }

        Some(next_constraint_id)
    }

    pub(crate) fn clear(&mut self) {
        while let Some(Reverse(priority)) = self.present_priorities.pop() {
            ossp_assert_moderate!(!self.queues[priority as usize].is_empty());
            self.queues[priority as usize].clear();
        }
        self.present_propagators.clear();
    }

    fn is_propagator_enqueued(&self, constraint_id: ConstraintId) -> bool {
        self.present_propagators.contains(&constraint_id)
    }
}
