//! Branch-and-bound optimisation of the lateness of a schedule.
//!
//! The search is driven by [`Solver::optimise`]; improving schedules can be observed through a
//! [`SolutionCallback`].
mod branch_and_bound;
mod solution_callback;

pub(crate) use branch_and_bound::BranchAndBound;
pub use solution_callback::SolutionCallback;

#[cfg(doc)]
use crate::Solver;

/// The function of the lateness of the jobs which is minimised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Objective {
    /// The sum of the lateness of all jobs.
    TotalLateness,
    /// The largest lateness of any job.
    MaximumLateness,
}

impl Objective {
    /// Aggregates the lateness values of a schedule; no jobs means an objective value of 0.
    pub fn evaluate(self, lateness: impl IntoIterator<Item = i64>) -> i64 {
        let lateness = lateness.into_iter();
        match self {
            Objective::TotalLateness => lateness.sum(),
            Objective::MaximumLateness => lateness.max().unwrap_or(0),
        }
    }
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Objective::TotalLateness => write!(f, "total lateness"),
            Objective::MaximumLateness => write!(f, "maximum lateness"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_of_both_objectives() {
        assert_eq!(9, Objective::TotalLateness.evaluate([2, 0, 7]));
        assert_eq!(7, Objective::MaximumLateness.evaluate([2, 0, 7]));
        assert_eq!(0, Objective::MaximumLateness.evaluate([]));
    }
}
