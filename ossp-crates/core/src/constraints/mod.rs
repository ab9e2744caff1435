//! The constraints which model the scheduling problem.
//!
//! Constraints are plain records over the variables of a
//! [`VariableStore`](crate::engine::VariableStore); the corresponding filtering lives in
//! [`propagators`](crate::propagators).
use enumset::EnumSet;

use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::engine::variables::DomainId;
use crate::engine::variables::OptionalInterval;
use crate::engine::DomainEvent;
use crate::engine::VariableStore;
use crate::optimisation::Objective;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct ConstraintId(u32);

impl StorageKey for ConstraintId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        ConstraintId(index as u32)
    }
}

impl std::fmt::Display for ConstraintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Constraint {
    /// `start >= release`.
    ReleaseBound { start: DomainId, release: i64 },
    /// `end = start + duration`, holds for every job whichever machine processes it.
    ProcessingTime {
        start: DomainId,
        end: DomainId,
        duration: i64,
    },
    /// If the interval is present then `end = start + duration`; an interval which cannot fit is
    /// absent.
    IntervalLink { interval: OptionalInterval },
    /// `lateness = max(0, end - limit)`.
    LatenessDefinition {
        end: DomainId,
        lateness: DomainId,
        limit: i64,
    },
    /// Exactly one of the 0/1 flags is 1.
    ExactlyOne { flags: Vec<DomainId> },
    /// The present intervals of a machine do not overlap.
    NoOverlap {
        machine: usize,
        intervals: Vec<OptionalInterval>,
    },
    /// `objective = sum(terms)`.
    ObjectiveSum {
        objective: DomainId,
        terms: Vec<DomainId>,
    },
    /// `objective = max(terms)`, or 0 without terms.
    ObjectiveMax {
        objective: DomainId,
        terms: Vec<DomainId>,
    },
}

impl Constraint {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Constraint::ReleaseBound { .. } => "ReleaseBound",
            Constraint::ProcessingTime { .. } => "ProcessingTime",
            Constraint::IntervalLink { .. } => "IntervalLink",
            Constraint::LatenessDefinition { .. } => "LatenessDefinition",
            Constraint::ExactlyOne { .. } => "ExactlyOne",
            Constraint::NoOverlap { .. } => "NoOverlap",
            Constraint::ObjectiveSum { .. } => "ObjectiveSum",
            Constraint::ObjectiveMax { .. } => "ObjectiveMax",
        }
    }

    /// The domain events after which this constraint should be propagated again.
    ///
    /// Every constraint is propagated once at the root regardless of its subscriptions.
    pub(crate) fn subscriptions(&self) -> Vec<(DomainId, EnumSet<DomainEvent>)> {
        match self {
            // Lower bounds of starts only increase, once enforced this holds in every descendant.
            Constraint::ReleaseBound { .. } => vec![],
            Constraint::ProcessingTime { start, end, .. } => {
                vec![(*start, DomainEvent::BOUNDS), (*end, DomainEvent::BOUNDS)]
            }
            Constraint::IntervalLink { interval } => vec![
                (interval.start, DomainEvent::BOUNDS),
                (interval.end, DomainEvent::BOUNDS),
                (interval.presence, DomainEvent::ASSIGN),
            ],
            Constraint::LatenessDefinition { end, lateness, .. } => vec![
                (*end, DomainEvent::BOUNDS),
                (*lateness, DomainEvent::UPPER_BOUND),
            ],
            Constraint::ExactlyOne { flags } => flags
                .iter()
                .map(|&flag| (flag, DomainEvent::ASSIGN))
                .collect(),
            Constraint::NoOverlap { intervals, .. } => intervals
                .iter()
                .flat_map(|interval| {
                    [
                        (interval.start, DomainEvent::BOUNDS),
                        (interval.presence, DomainEvent::ASSIGN),
                    ]
                })
                .collect(),
            Constraint::ObjectiveSum { objective, terms }
            | Constraint::ObjectiveMax { objective, terms } => terms
                .iter()
                .map(|&term| (term, DomainEvent::BOUNDS))
                .chain(std::iter::once((*objective, DomainEvent::UPPER_BOUND)))
                .collect(),
        }
    }

    /// Constraints which are cheap to propagate are run before the expensive ones.
    pub(crate) fn priority(&self) -> u32 {
        match self {
            Constraint::NoOverlap { .. } => 1,
            _ => 0,
        }
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::ReleaseBound { start, release } => {
                write!(f, "ReleaseBound({start} >= {release})")
            }
            Constraint::ProcessingTime {
                start,
                end,
                duration,
            } => write!(f, "ProcessingTime({end} = {start} + {duration})"),
            Constraint::IntervalLink { interval } => write!(
                f,
                "IntervalLink({} -> {} = {} + {})",
                interval.presence, interval.end, interval.start, interval.duration
            ),
            Constraint::LatenessDefinition {
                end,
                lateness,
                limit,
            } => write!(f, "LatenessDefinition({lateness} = max(0, {end} - {limit}))"),
            Constraint::NoOverlap { machine, intervals } => {
                write!(f, "NoOverlap(machine {machine}, {} intervals)", intervals.len())
            }
            other => write!(f, "{}", other.name()),
        }
    }
}

/// The full model of an instance: all constraints posted over one [`VariableStore`].
#[derive(Debug, Clone, Default)]
pub(crate) struct ConstraintSet {
    constraints: KeyedVec<ConstraintId, Constraint>,
}

impl ConstraintSet {
    /// Creates the constraints of the scheduling model for the variables of `store`.
    ///
    /// Every job gets its release bound, processing time, lateness definition and the exactly-one
    /// constraint over its machine flags; every machine gets a no-overlap constraint over the
    /// optional intervals of all jobs; finally the objective is linked to the lateness variables.
    pub(crate) fn build(store: &VariableStore, objective: Objective) -> ConstraintSet {
        let mut constraint_set = ConstraintSet::default();

        for job in store.jobs() {
            let _ = constraint_set.add(Constraint::ReleaseBound {
                start: job.start,
                release: job.spec.release,
            });
            let _ = constraint_set.add(Constraint::ProcessingTime {
                start: job.start,
                end: job.end,
                duration: job.spec.duration,
            });
            for &interval in &job.intervals {
                let _ = constraint_set.add(Constraint::IntervalLink { interval });
            }
            let _ = constraint_set.add(Constraint::LatenessDefinition {
                end: job.end,
                lateness: job.lateness,
                limit: job.spec.limit,
            });
            let _ = constraint_set.add(Constraint::ExactlyOne {
                flags: job.presence.clone(),
            });
        }

        for machine in 0..store.machine_count() {
            let _ = constraint_set.add(Constraint::NoOverlap {
                machine,
                intervals: store
                    .jobs()
                    .iter()
                    .map(|job| job.intervals[machine])
                    .collect(),
            });
        }

        let terms = store.jobs().iter().map(|job| job.lateness).collect();
        let _ = constraint_set.add(match objective {
            Objective::TotalLateness => Constraint::ObjectiveSum {
                objective: store.objective(),
                terms,
            },
            Objective::MaximumLateness => Constraint::ObjectiveMax {
                objective: store.objective(),
                terms,
            },
        });

        constraint_set
    }

    pub(crate) fn add(&mut self, constraint: Constraint) -> ConstraintId {
        self.constraints.push(constraint)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.constraints.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (ConstraintId, &Constraint)> + '_ {
        self.constraints.keys().zip(self.constraints.iter())
    }
}

impl std::ops::Index<ConstraintId> for ConstraintSet {
    type Output = Constraint;

    fn index(&self, index: ConstraintId) -> &Self::Output {
        &self.constraints[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::JobSpec;

    #[test]
    fn model_has_expected_shape() {
        let jobs = vec![JobSpec::new(0, 3), JobSpec::new(1, 4), JobSpec::new(2, 1)];
        let store = VariableStore::create(&jobs, 2).unwrap();

        let constraints = ConstraintSet::build(&store, Objective::TotalLateness);

        // 4 job-level constraints plus one link per machine, per job.
        let per_job = 4 + 2;
        assert_eq!(3 * per_job + 2 + 1, constraints.len());

        let no_overlaps = constraints
            .iter()
            .filter(|(_, c)| matches!(c, Constraint::NoOverlap { intervals, .. } if intervals.len() == 3))
            .count();
        assert_eq!(2, no_overlaps);
    }

    #[test]
    fn objective_kind_selects_aggregation() {
        let store = VariableStore::create(&[JobSpec::new(0, 3)], 1).unwrap();

        let sum = ConstraintSet::build(&store, Objective::TotalLateness);
        let max = ConstraintSet::build(&store, Objective::MaximumLateness);

        assert!(sum
            .iter()
            .any(|(_, c)| matches!(c, Constraint::ObjectiveSum { .. })));
        assert!(max
            .iter()
            .any(|(_, c)| matches!(c, Constraint::ObjectiveMax { .. })));
        assert!(!max
            .iter()
            .any(|(_, c)| matches!(c, Constraint::ObjectiveSum { .. })));
    }
}
