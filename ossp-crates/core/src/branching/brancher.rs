use super::Decision;
use crate::engine::VariableStore;

/// A trait for defining a branching strategy.
///
/// The alternatives of a choice point should together cover every schedule (of interest) below the
/// current node; they are explored in the order in which they are returned.
pub(crate) trait Brancher {
    /// Returns the alternatives to branch on, or [`None`] if the current node describes a
    /// complete schedule.
    ///
    /// An empty list of alternatives means that the node should be abandoned.
    fn next_choice_point(&mut self, store: &VariableStore) -> Option<Vec<Decision>>;
}
