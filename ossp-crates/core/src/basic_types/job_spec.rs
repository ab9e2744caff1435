/// The limit used for jobs which do not specify one; large enough that it never causes lateness
/// for any horizon that fits in the supported time range.
pub const NO_LIMIT: i64 = i32::MAX as i64;

/// Description of a job which should be processed on exactly one machine.
///
/// A job occupies its machine for `duration` consecutive time units, cannot start before `release`
/// and is late by however much its completion exceeds `limit`.
///
/// # Example
/// ```rust
/// # use ossp_core::JobSpec;
/// let job = JobSpec::new(3, 10).with_release(2).with_limit(15).with_name("drill");
///
/// assert_eq!(job.release, 2);
/// assert_eq!(job.limit, 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobSpec {
    /// Unique identifier of the job.
    pub job_id: u32,
    /// Processing time, should be positive.
    pub duration: i64,
    /// The earliest point in time at which the job can start.
    pub release: i64,
    /// The target completion time; completing later than this is counted as lateness.
    pub limit: i64,
    /// Optional display label, empty if unnamed.
    pub name: String,
}

impl JobSpec {
    /// Creates a job which is released at time 0 and has no effective limit.
    pub fn new(job_id: u32, duration: i64) -> Self {
        JobSpec {
            job_id,
            duration,
            release: 0,
            limit: NO_LIMIT,
            name: String::new(),
        }
    }

    pub fn with_release(mut self, release: i64) -> Self {
        self.release = release;
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
