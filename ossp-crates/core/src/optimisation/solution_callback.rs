use std::ops::ControlFlow;

use crate::basic_types::Schedule;

/// Called by the branch-and-bound search every time it finds a schedule which improves on the
/// best one so far.
///
/// Returning [`ControlFlow::Break`] stops the search; the result then reports the last schedule
/// as feasible rather than optimal.
pub trait SolutionCallback {
    fn on_solution_callback(&mut self, solution: &Schedule) -> ControlFlow<()>;
}

impl<T: FnMut(&Schedule) -> ControlFlow<()>> SolutionCallback for T {
    fn on_solution_callback(&mut self, solution: &Schedule) -> ControlFlow<()> {
        (self)(solution)
    }
}

impl<T: SolutionCallback> SolutionCallback for Option<T> {
    fn on_solution_callback(&mut self, solution: &Schedule) -> ControlFlow<()> {
        match self {
            Some(callback) => callback.on_solution_callback(solution),
            None => ControlFlow::Continue(()),
        }
    }
}
