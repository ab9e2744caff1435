use std::ops::ControlFlow;

use log::info;

use crate::basic_types::InvalidSpec;
use crate::basic_types::JobSpec;
use crate::basic_types::Schedule;
use crate::branching::AssignThenRankBrancher;
use crate::constraints::ConstraintSet;
use crate::engine::PropagationEngine;
use crate::engine::SearchStatistics;
use crate::engine::VariableStore;
use crate::optimisation::BranchAndBound;
use crate::optimisation::Objective;
use crate::optimisation::SolutionCallback;
use crate::results::OptimisationResult;
use crate::results::SolutionStream;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::termination::Indefinite;
use crate::termination::TerminationCondition;

/// Options for the [`Solver`] which determine how it behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    /// Whether the search only assigns a job to the machines used by jobs with a smaller id plus
    /// the first unused machine. Machines are identical so this does not exclude any objective
    /// value.
    pub symmetry_breaking: bool,
    /// Whether the statistics of the search are logged at the end of every optimisation call.
    pub log_statistics: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            symmetry_breaking: true,
            log_statistics: false,
        }
    }
}

/// The main interaction point which allows describing a scheduling instance and optimising it.
///
/// Every optimisation call validates the jobs and builds a fresh model, so the same solver can be
/// used for several objectives in turn.
///
/// # Example
/// ```rust
/// # use ossp_core::JobSpec;
/// # use ossp_core::Solver;
/// # use ossp_core::results::SolveStatus;
/// let mut solver = Solver::new(2);
/// let _ = solver
///     .add_job(JobSpec::new(0, 4).with_limit(4))
///     .add_job(JobSpec::new(1, 3).with_limit(3))
///     .add_job(JobSpec::new(2, 2).with_limit(5));
///
/// let result = solver.minimise_total_lateness().expect("the jobs are valid");
///
/// assert_eq!(SolveStatus::Optimal, result.status());
/// assert_eq!(Some(0), result.objective_value());
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    machine_count: usize,
    jobs: Vec<JobSpec>,
    options: SolverOptions,
    statistics: SearchStatistics,
}

impl Solver {
    /// Creates a solver for `machine_count` identical machines with the default options.
    pub fn new(machine_count: usize) -> Self {
        Solver::with_options(machine_count, SolverOptions::default())
    }

    pub fn with_options(machine_count: usize, options: SolverOptions) -> Self {
        Solver {
            machine_count,
            jobs: Vec::new(),
            options,
            statistics: SearchStatistics::default(),
        }
    }

    /// Adds a job to the instance. Jobs are validated when optimising.
    pub fn add_job(&mut self, job: JobSpec) -> &mut Self {
        self.jobs.push(job);
        self
    }

    pub fn add_jobs(&mut self, jobs: impl IntoIterator<Item = JobSpec>) -> &mut Self {
        self.jobs.extend(jobs);
        self
    }

    pub fn jobs(&self) -> &[JobSpec] {
        &self.jobs
    }

    pub fn machine_count(&self) -> usize {
        self.machine_count
    }

    /// The statistics of the most recent optimisation call.
    pub fn statistics(&self) -> SearchStatistics {
        self.statistics
    }

    /// Logs the statistics of the most recent optimisation call.
    pub fn log_statistics(&self) {
        self.statistics.log(StatisticLogger::new(["search"]));
    }
}

/// Methods for optimising the instance
impl Solver {
    /// Finds a schedule with the smallest sum of lateness, searching until optimality is proven.
    pub fn minimise_total_lateness(&mut self) -> Result<OptimisationResult, InvalidSpec> {
        self.optimise(
            Objective::TotalLateness,
            &mut Indefinite,
            &mut |_: &Schedule| ControlFlow::Continue(()),
        )
    }

    /// Finds a schedule with the smallest maximum lateness, searching until optimality is proven.
    pub fn minimise_maximum_lateness(&mut self) -> Result<OptimisationResult, InvalidSpec> {
        self.optimise(
            Objective::MaximumLateness,
            &mut Indefinite,
            &mut |_: &Schedule| ControlFlow::Continue(()),
        )
    }

    /// Minimises `objective` using branch-and-bound.
    ///
    /// The `solution_callback` is invoked with every schedule which improves on the previous one;
    /// it can stop the search by returning [`ControlFlow::Break`]. The result is
    /// [`OptimisationResult::Optimal`] only if the search space was exhausted.
    ///
    /// The jobs are validated first; on an [`InvalidSpec`] no search takes place.
    pub fn optimise(
        &mut self,
        objective: Objective,
        termination: &mut impl TerminationCondition,
        solution_callback: &mut impl SolutionCallback,
    ) -> Result<OptimisationResult, InvalidSpec> {
        let mut store = VariableStore::create(&self.jobs, self.machine_count)?;
        let constraints = ConstraintSet::build(&store, objective);
        let mut engine = PropagationEngine::new(constraints, &store);
        let mut brancher = AssignThenRankBrancher::new(&store, self.options.symmetry_breaking);

        info!(
            "Minimising {objective} of {} jobs on {} machines (horizon {})",
            self.jobs.len(),
            self.machine_count,
            store.horizon()
        );

        let mut search = BranchAndBound::new(objective);
        let result = search.optimise(
            &mut store,
            &mut engine,
            &mut brancher,
            termination,
            solution_callback,
        );
        self.statistics = search.statistics();

        info!(
            "Search concluded with status {} and objective {:?}",
            result.status(),
            result.objective_value()
        );
        if self.options.log_statistics {
            self.log_statistics();
        }

        Ok(result)
    }

    /// Minimises `objective` and collects every improving schedule in the order in which it was
    /// found.
    pub fn improving_solutions(
        &mut self,
        objective: Objective,
        termination: &mut impl TerminationCondition,
    ) -> Result<SolutionStream, InvalidSpec> {
        let mut solutions = Vec::new();
        let result = self.optimise(objective, termination, &mut |schedule: &Schedule| {
            solutions.push(schedule.clone());
            ControlFlow::Continue(())
        })?;

        Ok(SolutionStream::new(solutions, result))
    }
}
