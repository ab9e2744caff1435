use std::iter::Rev;
use std::vec::Drain;

use crate::ossp_assert_simple;

/// A stack of undo records split into checkpoints, one per search depth.
///
/// Entries pushed after [`Trail::new_checkpoint`] belong to that checkpoint and are handed back (in
/// reverse order) by [`Trail::synchronise`] so the owner can restore the state it had before.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    current_checkpoint: usize,
    /// At index i is the position where the i-th checkpoint ends (exclusive) on the trail
    trail_delimiter: Vec<usize>,
    trail: Vec<T>,
}

// Implemented by hand so that `T` is not required to implement `Default`.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            current_checkpoint: 0,
            trail_delimiter: Vec::new(),
            trail: Vec::new(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn new_checkpoint(&mut self) {
        self.current_checkpoint += 1;
        self.trail_delimiter.push(self.trail.len());
    }

    pub(crate) fn get_checkpoint(&self) -> usize {
        self.current_checkpoint
    }

    /// Removes every entry recorded after `new_checkpoint`, most recent first.
    pub(crate) fn synchronise(&mut self, new_checkpoint: usize) -> Rev<Drain<'_, T>> {
        ossp_assert_simple!(new_checkpoint < self.current_checkpoint);

        let new_trail_len = self.trail_delimiter[new_checkpoint];

        self.current_checkpoint = new_checkpoint;
        self.trail_delimiter.truncate(new_checkpoint);
        self.trail.drain(new_trail_len..).rev()
    }

    pub(crate) fn push(&mut self, elem: T) {
        self.trail.push(elem)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.trail.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_entries_are_kept_when_returning_to_the_root() {
        let mut trail = Trail::default();
        trail.push('a');
        trail.new_checkpoint();
        trail.push('b');

        let undone = trail.synchronise(0).collect::<String>();

        assert_eq!("b", undone);
        assert_eq!(1, trail.len());
        assert_eq!(0, trail.get_checkpoint());
    }

    #[test]
    fn undo_records_restore_the_oldest_value_last() {
        // Two bound changes to the same value at different depths.
        let mut value = 0;
        let mut trail = Trail::default();

        trail.new_checkpoint();
        trail.push(value);
        value = 3;
        trail.new_checkpoint();
        trail.push(value);
        value = 8;
        assert_eq!(8, value);

        for previous in trail.synchronise(0) {
            value = previous;
        }

        assert_eq!(0, value);
    }

    #[test]
    fn synchronising_to_an_intermediate_checkpoint_keeps_older_entries() {
        let mut trail = Trail::default();
        for depth in 1..=3 {
            trail.new_checkpoint();
            trail.push(depth * 10);
            trail.push(depth * 10 + 1);
        }

        let undone = trail.synchronise(1).collect::<Vec<_>>();

        assert_eq!(vec![31, 30, 21, 20], undone);
        assert_eq!(2, trail.len());
        assert_eq!(1, trail.get_checkpoint());

        trail.new_checkpoint();
        assert_eq!(2, trail.get_checkpoint());
    }
}
