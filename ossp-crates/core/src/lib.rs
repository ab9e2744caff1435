//! # ossp
//! A constraint-programming solver for assigning jobs to identical machines. Every job needs an
//! uninterrupted processing interval on exactly one machine, may not start before its release
//! time and is late by however much it completes after its limit. The solver minimises either the
//! total lateness or the maximum lateness over all jobs.
//!
//! The model consists of integer variables for the start, end and lateness of every job, a 0/1
//! presence flag per job and machine and an objective variable. It is solved with a depth-first
//! branch-and-bound search on top of bounds propagation, including a disjunctive propagator per
//! machine. Every call either proves a schedule optimal or reports the best one found before a
//! [`TerminationCondition`](termination::TerminationCondition) triggered.
//!
//! # Using the solver
//! First the instance is described by adding jobs to a [`Solver`]:
//! ```rust
//! # use ossp_core::JobSpec;
//! # use ossp_core::Solver;
//! let mut solver = Solver::new(2);
//!
//! let _ = solver
//!     .add_job(JobSpec::new(0, 5).with_limit(5))
//!     .add_job(JobSpec::new(1, 3).with_release(1).with_limit(4))
//!     .add_job(JobSpec::new(2, 4).with_limit(6).with_name("polish"));
//! ```
//!
//! Then one of the objectives can be minimised:
//! ```rust
//! # use ossp_core::JobSpec;
//! # use ossp_core::Solver;
//! # use ossp_core::results::OptimisationResult;
//! # let mut solver = Solver::new(2);
//! # let _ = solver
//! #     .add_job(JobSpec::new(0, 5).with_limit(5))
//! #     .add_job(JobSpec::new(1, 3).with_release(1).with_limit(4))
//! #     .add_job(JobSpec::new(2, 4).with_limit(6).with_name("polish"));
//! let result = solver.minimise_maximum_lateness().expect("the jobs are valid");
//!
//! if let OptimisationResult::Optimal(schedule) = result {
//!     for job in schedule.jobs() {
//!         println!("{job}");
//!     }
//!     // Job 0 runs alone, jobs 1 and 2 share a machine and job 2 finishes 2 units late.
//!     assert_eq!(2, schedule.objective_value());
//! }
//! ```
//!
//! # Observing improving schedules
//! [`Solver::optimise`] accepts a [`TerminationCondition`](termination::TerminationCondition)
//! and a [`SolutionCallback`](options::SolutionCallback) which is invoked with every improving
//! schedule; [`Solver::improving_solutions`] collects all of them:
//! ```rust
//! # use ossp_core::JobSpec;
//! # use ossp_core::Solver;
//! # use ossp_core::options::Objective;
//! # use ossp_core::termination::Indefinite;
//! let mut solver = Solver::new(1);
//! let _ = solver.add_jobs((0..4).map(|id| JobSpec::new(id, 2 + id as i64).with_limit(3)));
//!
//! let stream = solver
//!     .improving_solutions(Objective::TotalLateness, &mut Indefinite)
//!     .expect("the jobs are valid");
//!
//! let values = stream
//!     .solutions()
//!     .iter()
//!     .map(|schedule| schedule.objective_value())
//!     .collect::<Vec<_>>();
//! assert!(values.windows(2).all(|pair| pair[0] > pair[1]));
//! ```
pub(crate) mod asserts;
pub(crate) mod basic_types;
pub(crate) mod branching;
pub(crate) mod constraints;
pub mod containers;
pub(crate) mod engine;
pub mod optimisation;
pub(crate) mod propagators;
pub mod statistics;
pub mod termination;

pub use convert_case;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
//
// Example:
// `use ossp_core::Solver;`
// vs.
// `use ossp_core::api::Solver;`
mod api;

pub use api::*;

pub use crate::api::solver::Solver;
pub use crate::basic_types::InvalidSpec;
pub use crate::basic_types::JobSpec;
pub use crate::basic_types::NO_LIMIT;
