use std::fmt::Display;
use std::fmt::Formatter;

/// The placement of a single job in a [`Schedule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedJob {
    pub job_id: u32,
    pub start: i64,
    /// Exclusive end of processing, i.e. `start + duration`.
    pub end: i64,
    /// `max(0, end - limit)`.
    pub lateness: i64,
    pub limit: i64,
    pub release: i64,
    /// One entry per machine; exactly one of them is set.
    pub assigned_flags: Vec<bool>,
    pub name: String,
}

impl AssignedJob {
    /// The index of the machine which processes this job, or [`None`] if no flag is set.
    ///
    /// Jobs in a [`Schedule`] returned by the solver always have a machine.
    pub fn machine(&self) -> Option<usize> {
        self.assigned_flags.iter().position(|&flag| flag)
    }
}

impl Display for AssignedJob {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "job {} [{}, {}) ", self.job_id, self.start, self.end)?;
        match self.machine() {
            Some(machine) => write!(f, "on machine {machine}")?,
            None => write!(f, "unassigned")?,
        }
        write!(f, " (lateness {})", self.lateness)
    }
}

/// A complete assignment of jobs to machines and start times, together with the value it attains
/// for the objective it was optimised for.
///
/// The jobs are stored in the order in which they were added to the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    jobs: Vec<AssignedJob>,
    objective_value: i64,
}

impl Schedule {
    pub(crate) fn new(jobs: Vec<AssignedJob>, objective_value: i64) -> Self {
        Schedule {
            jobs,
            objective_value,
        }
    }

    pub fn jobs(&self) -> &[AssignedJob] {
        &self.jobs
    }

    pub fn into_jobs(self) -> Vec<AssignedJob> {
        self.jobs
    }

    pub fn objective_value(&self) -> i64 {
        self.objective_value
    }

    pub fn total_lateness(&self) -> i64 {
        self.jobs.iter().map(|job| job.lateness).sum()
    }

    pub fn maximum_lateness(&self) -> i64 {
        self.jobs.iter().map(|job| job.lateness).max().unwrap_or(0)
    }

    /// Returns the jobs processed by `machine`, ordered by start time.
    pub fn jobs_on_machine(&self, machine: usize) -> Vec<&AssignedJob> {
        let mut jobs = self
            .jobs
            .iter()
            .filter(|job| job.assigned_flags.get(machine).copied().unwrap_or(false))
            .collect::<Vec<_>>();
        jobs.sort_by_key(|job| (job.start, job.job_id));
        jobs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assigned(job_id: u32, start: i64, end: i64, lateness: i64, machine: usize) -> AssignedJob {
        let mut assigned_flags = vec![false; 2];
        assigned_flags[machine] = true;
        AssignedJob {
            job_id,
            start,
            end,
            lateness,
            limit: end - lateness,
            release: 0,
            assigned_flags,
            name: String::new(),
        }
    }

    #[test]
    fn lateness_aggregates() {
        let schedule = Schedule::new(
            vec![assigned(0, 0, 5, 2, 0), assigned(1, 0, 4, 0, 1), assigned(2, 5, 9, 7, 0)],
            9,
        );

        assert_eq!(9, schedule.total_lateness());
        assert_eq!(7, schedule.maximum_lateness());
    }

    #[test]
    fn jobs_on_machine_are_sorted_by_start() {
        let schedule = Schedule::new(
            vec![assigned(0, 5, 9, 0, 0), assigned(1, 0, 4, 0, 1), assigned(2, 0, 5, 0, 0)],
            0,
        );

        let on_first = schedule
            .jobs_on_machine(0)
            .iter()
            .map(|job| job.job_id)
            .collect::<Vec<_>>();

        assert_eq!(vec![2, 0], on_first);
        assert_eq!(Some(1), schedule.jobs()[1].machine());
    }

    #[test]
    fn job_without_machine_flag_is_displayed_as_unassigned() {
        let mut job = assigned(3, 2, 6, 1, 1);
        assert_eq!("job 3 [2, 6) on machine 1 (lateness 1)", job.to_string());

        job.assigned_flags = vec![false; 2];
        assert_eq!(None, job.machine());
        assert_eq!("job 3 [2, 6) unassigned (lateness 1)", job.to_string());
    }
}
