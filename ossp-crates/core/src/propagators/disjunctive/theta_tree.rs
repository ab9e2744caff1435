use std::cmp::max;

use super::disjunctive_task::DisjunctiveTask;
use crate::containers::KeyedVec;
use crate::engine::VariableStore;
use crate::ossp_assert_simple;

// A node in the [`ThetaTree`] which keeps track of the ECT and sum of processing times of its
// children
#[derive(Debug, Clone)]
struct Node {
    ect: i64,
    sum_of_processing_times: i64,
}

impl Node {
    fn empty() -> Self {
        Self {
            ect: i64::MIN,
            sum_of_processing_times: 0,
        }
    }

    fn new(ect: i64, sum_of_processing_times: i64) -> Self {
        Self {
            ect,
            sum_of_processing_times,
        }
    }
}

/// A structure for efficiently calculating the ECT of a set of tasks.
///
/// The implementation is based on \[1\]. The idea is to have a complete binary tree where the leaf
/// nodes represent the tasks. These leaf nodes are sorted by EST and this allows the values of the
/// inner nodes to be calculated using a recursive formula.
///
/// # Bibliography
/// \[1\] P. Vilím, ‘Filtering algorithms for the unary resource constraint’, Archives of Control
/// Sciences, vol. 18, no. 2, pp. 159–202, 2008.
#[derive(Debug)]
pub(super) struct ThetaTree {
    nodes: Vec<Node>,
    /// Maps the id of a task to the position of its leaf among the leaves.
    mapping: KeyedVec<usize, usize>,
}

impl ThetaTree {
    pub(super) fn new(tasks: &[DisjunctiveTask], store: &VariableStore) -> Self {
        // First we sort the tasks by lower-bound
        let mut sorted_tasks = tasks.to_vec();
        sorted_tasks.sort_by_key(|task| (task.est(store), task.id));

        let mut mapping = KeyedVec::default();
        for (index, task) in sorted_tasks.iter().enumerate() {
            mapping.accomodate(task.id, usize::MAX);
            mapping[task.id] = index
        }

        // The number of leaves is the smallest power of two which can hold all tasks
        let mut number_of_leaves = 1;
        while number_of_leaves < tasks.len() {
            number_of_leaves <<= 1;
        }
        let nodes = vec![Node::empty(); 2 * number_of_leaves - 1];
        ThetaTree { nodes, mapping }
    }

    /// Returns the earliest completion time of Theta
    pub(super) fn ect(&self) -> i64 {
        ossp_assert_simple!(!self.nodes.is_empty());
        self.nodes[0].ect
    }

    /// Add the provided task to Theta
    pub(super) fn add(&mut self, task: &DisjunctiveTask, store: &VariableStore) {
        // There are |nodes| / 2 internal nodes before the first leaf
        let position = self.nodes.len() / 2 + self.mapping[task.id];

        self.nodes[position] = Node::new(task.ect(store), task.duration);
        self.upheap(position)
    }

    fn get_left_child_index(index: usize) -> usize {
        2 * index + 1
    }

    fn get_right_child_index(index: usize) -> usize {
        2 * index + 2
    }

    fn get_parent(index: usize) -> usize {
        ossp_assert_simple!(index > 0);
        (index - 1) / 2
    }

    /// Calculate the new values for the ancestors of the provided index
    fn upheap(&mut self, mut index: usize) {
        while index != 0 {
            let parent = Self::get_parent(index);
            let left_child_parent = Self::get_left_child_index(parent);
            let right_child_parent = Self::get_right_child_index(parent);
            ossp_assert_simple!(
                left_child_parent == index || right_child_parent == index,
                "Either the left or the right child should be equal to the provided index"
            );

            self.nodes[parent].sum_of_processing_times = self.nodes[left_child_parent]
                .sum_of_processing_times
                + self.nodes[right_child_parent].sum_of_processing_times;
            self.nodes[parent].ect = max(
                self.nodes[right_child_parent].ect,
                self.nodes[left_child_parent]
                    .ect
                    .saturating_add(self.nodes[right_child_parent].sum_of_processing_times),
            );

            index = parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_tasks(store: &mut VariableStore, est_and_duration: &[(i64, i64)]) -> Vec<DisjunctiveTask> {
        est_and_duration
            .iter()
            .enumerate()
            .map(|(id, &(est, duration))| DisjunctiveTask {
                start: store.new_variable(est, 100, format!("s{id}")),
                duration,
                id,
            })
            .collect()
    }

    #[test]
    fn ect_of_theta_accounts_for_sequencing() {
        let mut store = VariableStore::default();
        let tasks = new_tasks(&mut store, &[(0, 5), (2, 4), (20, 1)]);
        let mut tree = ThetaTree::new(&tasks, &store);

        tree.add(&tasks[0], &store);
        assert_eq!(5, tree.ect());

        tree.add(&tasks[1], &store);
        assert_eq!(9, tree.ect());

        tree.add(&tasks[2], &store);
        assert_eq!(21, tree.ect());
    }

    #[test]
    fn leaves_are_ordered_by_est_regardless_of_insertion_order() {
        let mut store = VariableStore::default();
        let tasks = new_tasks(&mut store, &[(3, 2), (0, 6)]);
        let mut tree = ThetaTree::new(&tasks, &store);

        tree.add(&tasks[0], &store);
        assert_eq!(5, tree.ect());

        tree.add(&tasks[1], &store);
        assert_eq!(8, tree.ect());
    }
}
