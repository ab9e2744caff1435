//! Shared checks for the integration tests of the scheduler.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use itertools::Itertools;
use ossp_core::options::Objective;
use ossp_core::results::Schedule;
use ossp_core::JobSpec;

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The seven job instance on three machines used across the tests.
pub(crate) fn seven_jobs() -> Vec<JobSpec> {
    let durations = [466, 53, 525, 580, 2238, 1555, 2038];
    let limits = [76, 158, 353, 322, 968, 761, 1183];

    durations
        .into_iter()
        .zip(limits)
        .enumerate()
        .map(|(id, (duration, limit))| JobSpec::new(id as u32, duration).with_limit(limit))
        .collect()
}

/// Panics if `schedule` is not a valid schedule of `jobs` on `machines` machines, or if its
/// objective value does not match the lateness of its jobs.
pub(crate) fn check_schedule(
    jobs: &[JobSpec],
    machines: usize,
    objective: Objective,
    schedule: &Schedule,
) {
    assert_eq!(jobs.len(), schedule.jobs().len());

    for (spec, assigned) in jobs.iter().zip(schedule.jobs()) {
        assert_eq!(spec.job_id, assigned.job_id);
        assert_eq!(machines, assigned.assigned_flags.len());
        assert_eq!(
            1,
            assigned.assigned_flags.iter().filter(|&&flag| flag).count(),
            "job {} should be on exactly one machine",
            spec.job_id
        );
        assert!(assigned.start >= spec.release, "{assigned} starts before its release");
        assert_eq!(assigned.start + spec.duration, assigned.end);
        assert_eq!((assigned.end - spec.limit).max(0), assigned.lateness);
    }

    for machine in 0..machines {
        for (first, second) in schedule.jobs_on_machine(machine).into_iter().tuple_windows() {
            assert!(first.end <= second.start, "{first} overlaps with {second}");
        }
    }

    let expected = match objective {
        Objective::TotalLateness => schedule.total_lateness(),
        Objective::MaximumLateness => schedule.maximum_lateness(),
    };
    assert_eq!(expected, schedule.objective_value());
}

/// Computes the optimal objective value by trying every machine assignment and every order of
/// the jobs on each machine, starting each job as early as its predecessor and release allow.
///
/// Only usable for a handful of jobs.
pub(crate) fn brute_force_optimum(jobs: &[JobSpec], machines: usize, objective: Objective) -> i64 {
    std::iter::repeat(0..machines)
        .take(jobs.len())
        .multi_cartesian_product()
        .map(|assignment| {
            let per_machine = (0..machines).map(|machine| {
                let on_machine = jobs
                    .iter()
                    .zip(&assignment)
                    .filter(|&(_, &assigned)| assigned == machine)
                    .map(|(job, _)| job)
                    .collect::<Vec<_>>();
                best_sequence(&on_machine, objective)
            });

            match objective {
                Objective::TotalLateness => per_machine.sum::<i64>(),
                Objective::MaximumLateness => per_machine.max().unwrap_or(0),
            }
        })
        .min()
        .unwrap_or(0)
}

fn best_sequence(jobs: &[&JobSpec], objective: Objective) -> i64 {
    jobs.iter()
        .permutations(jobs.len())
        .map(|order| {
            let mut time = 0_i64;
            let lateness = order.into_iter().map(|job| {
                time = time.max(job.release) + job.duration;
                (time - job.limit).max(0)
            });
            match objective {
                Objective::TotalLateness => lateness.sum::<i64>(),
                Objective::MaximumLateness => lateness.max().unwrap_or(0),
            }
        })
        .min()
        .unwrap_or(0)
}
