#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use ossp_core::options::Objective;
use ossp_core::termination::Indefinite;
use ossp_core::InvalidSpec;
use ossp_core::JobSpec;
use ossp_core::Solver;

fn total_lateness(jobs: Vec<JobSpec>, machines: usize) -> InvalidSpec {
    let mut solver = Solver::new(machines);
    let _ = solver.add_jobs(jobs);

    solver
        .minimise_total_lateness()
        .expect_err("the instance is invalid")
}

#[test]
fn zero_machines() {
    assert_eq!(
        InvalidSpec::NoMachines,
        total_lateness(vec![JobSpec::new(0, 1)], 0)
    );
    assert_eq!(InvalidSpec::NoMachines, total_lateness(vec![], 0));
}

#[test]
fn non_positive_duration() {
    assert_eq!(
        InvalidSpec::NonPositiveDuration {
            job_id: 4,
            duration: 0
        },
        total_lateness(vec![JobSpec::new(1, 3), JobSpec::new(4, 0)], 2)
    );
}

#[test]
fn negative_release() {
    assert_eq!(
        InvalidSpec::NegativeRelease {
            job_id: 2,
            release: -1
        },
        total_lateness(vec![JobSpec::new(2, 3).with_release(-1)], 1)
    );
}

#[test]
fn duplicate_job_id() {
    let error = total_lateness(vec![JobSpec::new(3, 1), JobSpec::new(3, 2)], 2);

    assert_eq!(InvalidSpec::DuplicateJobId(3), error);
    assert_eq!("Job id 3 is used by more than one job", error.to_string());
}

#[test]
fn horizon_overflow() {
    let half = i64::MAX / 2 + 1;

    assert_eq!(
        InvalidSpec::HorizonOverflow,
        total_lateness(vec![JobSpec::new(0, half), JobSpec::new(1, half)], 1)
    );
    assert_eq!(
        InvalidSpec::HorizonOverflow,
        total_lateness(vec![JobSpec::new(0, 1).with_release(i64::MAX)], 1)
    );
}

#[test]
fn horizon_plus_duration_overflow() {
    assert_eq!(
        InvalidSpec::HorizonOverflow,
        total_lateness(vec![JobSpec::new(0, i64::MAX / 2 + 10).with_limit(0)], 1)
    );
}

#[test]
fn streaming_validates_as_well() {
    let mut solver = Solver::new(1);
    let _ = solver.add_job(JobSpec::new(0, -5));

    assert_eq!(
        Err(InvalidSpec::NonPositiveDuration {
            job_id: 0,
            duration: -5
        }),
        solver
            .improving_solutions(Objective::MaximumLateness, &mut Indefinite)
            .map(|stream| stream.solutions().len())
    );
}
