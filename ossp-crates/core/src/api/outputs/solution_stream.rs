use super::OptimisationResult;
use crate::basic_types::Schedule;
#[cfg(doc)]
use crate::Solver;

/// Every improving schedule found by [`Solver::improving_solutions`], in the order in which they
/// were found, followed by the final result of the search.
///
/// The objective values of the schedules are strictly decreasing; the last one is the schedule of
/// the final result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionStream {
    solutions: Vec<Schedule>,
    result: OptimisationResult,
}

impl SolutionStream {
    pub(crate) fn new(solutions: Vec<Schedule>, result: OptimisationResult) -> Self {
        SolutionStream { solutions, result }
    }

    pub fn solutions(&self) -> &[Schedule] {
        &self.solutions
    }

    /// The best schedule of the stream, which is also the schedule of the final result.
    pub fn best(&self) -> Option<&Schedule> {
        self.solutions.last()
    }

    pub fn result(&self) -> &OptimisationResult {
        &self.result
    }

    pub fn into_parts(self) -> (Vec<Schedule>, OptimisationResult) {
        (self.solutions, self.result)
    }
}

impl IntoIterator for SolutionStream {
    type Item = Schedule;
    type IntoIter = std::vec::IntoIter<Schedule>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}
