use itertools::Itertools;

use super::VariableStore;
use crate::basic_types::AssignedJob;
use crate::basic_types::Schedule;
use crate::optimisation::Objective;
use crate::ossp_assert_advanced;
use crate::ossp_assert_eq_simple;
use crate::ossp_assert_moderate;
use crate::ossp_assert_simple;

/// Reads the schedule described by a store in which every start is fixed and every job has
/// exactly one machine.
pub(crate) fn extract_schedule(store: &VariableStore, objective: Objective) -> Schedule {
    let jobs = store
        .jobs()
        .iter()
        .map(|job| {
            ossp_assert_simple!(
                store.is_fixed(job.start),
                "the start of job {} is not fixed",
                job.spec.job_id
            );

            let start = store.lower_bound(job.start);
            let end = store.lower_bound(job.end);
            let lateness = store.lower_bound(job.lateness);
            let assigned_flags = job
                .presence
                .iter()
                .map(|&flag| store.lower_bound(flag) == 1)
                .collect::<Vec<_>>();

            ossp_assert_eq_simple!(
                1,
                assigned_flags.iter().filter(|&&flag| flag).count(),
                "job {} should be assigned to exactly one machine",
                job.spec.job_id
            );
            ossp_assert_moderate!(end == start + job.spec.duration);
            ossp_assert_moderate!(lateness == (end - job.spec.limit).max(0));

            AssignedJob {
                job_id: job.spec.job_id,
                start,
                end,
                lateness,
                limit: job.spec.limit,
                release: job.spec.release,
                assigned_flags,
                name: job.spec.name.clone(),
            }
        })
        .collect::<Vec<_>>();

    ossp_assert_advanced!(
        jobs.iter()
            .tuple_combinations()
            .filter(|(a, b)| a.assigned_flags == b.assigned_flags)
            .all(|(a, b)| a.end <= b.start || b.end <= a.start),
        "two jobs on the same machine overlap"
    );

    let objective_value = objective.evaluate(jobs.iter().map(|job| job.lateness));
    Schedule::new(jobs, objective_value)
}
