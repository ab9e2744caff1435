pub(crate) mod solution_stream;

use std::fmt::Display;
use std::fmt::Formatter;

use crate::basic_types::AssignedJob;
use crate::basic_types::Schedule;
#[cfg(doc)]
use crate::termination::TerminationCondition;
#[cfg(doc)]
use crate::Solver;

/// The result of a call to [`Solver::minimise_total_lateness`],
/// [`Solver::minimise_maximum_lateness`] or [`Solver::optimise`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptimisationResult {
    /// Indicates that the search space was exhausted; the provided [`Schedule`] is proven to be
    /// optimal.
    Optimal(Schedule),
    /// Indicates that the search stopped early and provides the best [`Schedule`] found. This is
    /// likely due to a [`TerminationCondition`] triggering or the solution callback stopping the
    /// search.
    Feasible(Schedule),
    /// Indicates that there is no schedule for the problem.
    Infeasible,
    /// Indicates that the search stopped before any schedule was found. This is likely due to a
    /// [`TerminationCondition`] triggering.
    Unknown,
}

impl OptimisationResult {
    pub fn status(&self) -> SolveStatus {
        match self {
            OptimisationResult::Optimal(_) => SolveStatus::Optimal,
            OptimisationResult::Feasible(_) => SolveStatus::Feasible,
            OptimisationResult::Infeasible => SolveStatus::Infeasible,
            OptimisationResult::Unknown => SolveStatus::Unknown,
        }
    }

    /// The best schedule found, if any.
    pub fn schedule(&self) -> Option<&Schedule> {
        match self {
            OptimisationResult::Optimal(schedule) | OptimisationResult::Feasible(schedule) => {
                Some(schedule)
            }
            OptimisationResult::Infeasible | OptimisationResult::Unknown => None,
        }
    }

    pub fn objective_value(&self) -> Option<i64> {
        self.schedule().map(Schedule::objective_value)
    }

    /// Splits the result into its status, the assigned jobs and the objective value.
    ///
    /// Without a schedule the jobs are empty and the objective value is 0.
    pub fn into_parts(self) -> (SolveStatus, Vec<AssignedJob>, i64) {
        let status = self.status();
        match self {
            OptimisationResult::Optimal(schedule) | OptimisationResult::Feasible(schedule) => {
                let objective_value = schedule.objective_value();
                (status, schedule.into_jobs(), objective_value)
            }
            OptimisationResult::Infeasible | OptimisationResult::Unknown => {
                (status, Vec::new(), 0)
            }
        }
    }
}

/// The outcome of an optimisation call without the schedule itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    Optimal,
    Feasible,
    Infeasible,
    Unknown,
}

impl Display for SolveStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "OPTIMAL"),
            SolveStatus::Feasible => write!(f, "FEASIBLE"),
            SolveStatus::Infeasible => write!(f, "INFEASIBLE"),
            SolveStatus::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_are_displayed_in_upper_case() {
        assert_eq!("OPTIMAL", SolveStatus::Optimal.to_string());
        assert_eq!("FEASIBLE", SolveStatus::Feasible.to_string());
        assert_eq!("INFEASIBLE", SolveStatus::Infeasible.to_string());
        assert_eq!("UNKNOWN", SolveStatus::Unknown.to_string());
    }

    #[test]
    fn results_without_schedule_have_empty_parts() {
        let (status, jobs, objective_value) = OptimisationResult::Unknown.into_parts();

        assert_eq!(SolveStatus::Unknown, status);
        assert!(jobs.is_empty());
        assert_eq!(0, objective_value);
        assert_eq!(None, OptimisationResult::Infeasible.objective_value());
    }

    #[test]
    fn schedule_is_shared_by_optimal_and_feasible() {
        let schedule = Schedule::new(Vec::new(), 3);

        let feasible = OptimisationResult::Feasible(schedule.clone());
        assert_eq!(Some(3), feasible.objective_value());
        assert_eq!(SolveStatus::Feasible, feasible.status());

        let (status, _, objective_value) = OptimisationResult::Optimal(schedule).into_parts();
        assert_eq!((SolveStatus::Optimal, 3), (status, objective_value));
    }
}
