pub(crate) mod outputs;
pub(crate) mod solver;

pub mod results {
    //! Contains the outputs of solving using the [`Solver`].
    //!
    //! An [`OptimisationResult`] reports the status of the search together with the best
    //! [`Schedule`] found; a [`SolutionStream`] additionally contains every improving schedule.
    pub use crate::api::outputs::solution_stream::SolutionStream;
    pub use crate::api::outputs::OptimisationResult;
    pub use crate::api::outputs::SolveStatus;
    pub use crate::basic_types::AssignedJob;
    pub use crate::basic_types::Schedule;
    pub use crate::engine::SearchStatistics;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod options {
    //! Contains the options which can be passed to the [`Solver`].
    //!
    //! These influence the following aspects:
    //! - The objective which is minimised
    //! - Whether symmetric machine assignments are pruned
    //! - The logging of statistics after every call
    pub use crate::api::solver::SolverOptions;
    pub use crate::optimisation::Objective;
    pub use crate::optimisation::SolutionCallback;
    #[cfg(doc)]
    use crate::Solver;
}
