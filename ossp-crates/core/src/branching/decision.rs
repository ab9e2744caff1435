use crate::basic_types::EmptyDomain;
use crate::engine::VariableStore;

/// A single branching decision; jobs are referred to by their position in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    /// Process `job` on `machine`.
    AssignMachine { job: usize, machine: usize },
    /// Schedule `job` at its earliest start, before every other job on its machine which is not
    /// yet sequenced.
    RankFirst { job: usize },
}

impl Decision {
    pub(crate) fn apply(self, store: &mut VariableStore) -> Result<(), EmptyDomain> {
        match self {
            Decision::AssignMachine { job, machine } => {
                let presence = store.jobs()[job].presence[machine];
                let _ = store.tighten_lower_bound(presence, 1)?;
            }
            Decision::RankFirst { job } => {
                let ranked = &store.jobs()[job];
                let (start, sequenced, duration) =
                    (ranked.start, ranked.sequenced, ranked.spec.duration);
                let machine = ranked.assigned_machine(store);

                let earliest_start = store.lower_bound(start);
                let _ = store.fix(start, earliest_start)?;
                let _ = store.fix(sequenced, 1)?;

                let successors = store
                    .jobs()
                    .iter()
                    .enumerate()
                    .filter(|&(other, variables)| {
                        other != job
                            && !variables.is_sequenced(store)
                            && machine.is_some()
                            && variables.assigned_machine(store) == machine
                    })
                    .map(|(_, variables)| variables.start)
                    .collect::<Vec<_>>();

                for successor in successors {
                    let _ = store.tighten_lower_bound(successor, earliest_start + duration)?;
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::AssignMachine { job, machine } => {
                write!(f, "[job {job} -> machine {machine}]")
            }
            Decision::RankFirst { job } => write!(f, "[rank job {job} first]"),
        }
    }
}
