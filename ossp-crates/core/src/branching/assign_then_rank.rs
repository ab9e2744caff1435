use super::Brancher;
use super::Decision;
use crate::engine::VariableStore;

/// Branches in two phases.
///
/// 1. Jobs are assigned to machines in order of increasing job id, trying the machines in order of
///    increasing index.
/// 2. Once every job has a machine, the machines are sequenced one at a time from left to right:
///    the alternatives are the unsequenced jobs which can start before any of them completes
///    (which yields active schedules), tried in order of earliest start.
///
/// Since the machines are identical, a job can optionally be restricted to the machines already
/// used by jobs with a smaller id plus the first unused one.
#[derive(Debug, Clone)]
pub(crate) struct AssignThenRankBrancher {
    /// The positions of the jobs in the store, ordered by job id.
    job_order: Vec<usize>,
    symmetry_breaking: bool,
}

impl AssignThenRankBrancher {
    pub(crate) fn new(store: &VariableStore, symmetry_breaking: bool) -> Self {
        let mut job_order = (0..store.jobs().len()).collect::<Vec<_>>();
        job_order.sort_by_key(|&job| store.jobs()[job].spec.job_id);

        AssignThenRankBrancher {
            job_order,
            symmetry_breaking,
        }
    }

    fn next_assignment(&self, store: &VariableStore) -> Option<Vec<Decision>> {
        let mut highest_used_machine: Option<usize> = None;

        for &job in &self.job_order {
            let variables = &store.jobs()[job];

            if let Some(machine) = variables.assigned_machine(store) {
                highest_used_machine = highest_used_machine.max(Some(machine));
                continue;
            }

            let first_unused_machine = highest_used_machine.map_or(0, |machine| machine + 1);
            let alternatives = (0..store.machine_count())
                .filter(|&machine| store.upper_bound(variables.presence[machine]) == 1)
                .filter(|&machine| !self.symmetry_breaking || machine <= first_unused_machine)
                .map(|machine| Decision::AssignMachine { job, machine })
                .collect();
            return Some(alternatives);
        }

        None
    }

    fn next_ranking(&self, store: &VariableStore) -> Option<Vec<Decision>> {
        for machine in 0..store.machine_count() {
            let unsequenced = self
                .job_order
                .iter()
                .copied()
                .filter(|&job| {
                    let variables = &store.jobs()[job];
                    variables.assigned_machine(store) == Some(machine)
                        && !variables.is_sequenced(store)
                })
                .collect::<Vec<_>>();

            let earliest_start = |job: usize| store.lower_bound(store.jobs()[job].start);

            let Some(earliest_completion) = unsequenced
                .iter()
                .map(|&job| earliest_start(job) + store.jobs()[job].spec.duration)
                .min()
            else {
                continue;
            };

            let mut candidates = unsequenced
                .into_iter()
                .filter(|&job| earliest_start(job) < earliest_completion)
                .collect::<Vec<_>>();
            // Stable, so ties keep the job id order.
            candidates.sort_by_key(|&job| earliest_start(job));

            return Some(
                candidates
                    .into_iter()
                    .map(|job| Decision::RankFirst { job })
                    .collect(),
            );
        }

        None
    }
}

impl Brancher for AssignThenRankBrancher {
    fn next_choice_point(&mut self, store: &VariableStore) -> Option<Vec<Decision>> {
        self.next_assignment(store)
            .or_else(|| self.next_ranking(store))
    }
}
