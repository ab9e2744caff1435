use thiserror::Error;

#[cfg(doc)]
use crate::Solver;

/// Errors related to malformed input given to the [`Solver`].
///
/// These are detected before any variable is created; a call which fails with an [`InvalidSpec`]
/// leaves nothing behind.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidSpec {
    /// There needs to be at least one machine to process jobs on.
    #[error("The number of machines should be at least 1")]
    NoMachines,
    /// Every job requires a positive processing time.
    #[error("Job {job_id} has a non-positive duration of {duration}")]
    NonPositiveDuration { job_id: u32, duration: i64 },
    /// Release times are points in time from the start of the schedule.
    #[error("Job {job_id} has a negative release time of {release}")]
    NegativeRelease { job_id: u32, release: i64 },
    /// Job identifiers are used to report the schedule and must be unique.
    #[error("Job id {0} is used by more than one job")]
    DuplicateJobId(u32),
    /// The time horizon derived from the jobs does not fit in the value range of the domains.
    #[error("The scheduling horizon overflows the supported range of time values")]
    HorizonOverflow,
}
