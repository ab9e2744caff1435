use enumset::EnumSet;
use log::trace;

use super::propagator_queue::PropagatorQueue;
use super::variables::DomainId;
use super::DomainEvent;
use super::SearchStatistics;
use super::VariableStore;
use crate::basic_types::Contradiction;
use crate::constraints::ConstraintId;
use crate::constraints::ConstraintSet;
use crate::containers::KeyedVec;
use crate::propagators;

const NUM_PRIORITY_LEVELS: u32 = 2;

#[derive(Debug, Clone, Copy)]
struct Watcher {
    constraint: ConstraintId,
    events: EnumSet<DomainEvent>,
}

/// Runs the propagators of a [`ConstraintSet`] until no domain changes any more.
#[derive(Debug)]
pub(crate) struct PropagationEngine {
    constraints: ConstraintSet,
    watch_lists: KeyedVec<DomainId, Vec<Watcher>>,
    queue: PropagatorQueue,
}

impl PropagationEngine {
    pub(crate) fn new(constraints: ConstraintSet, store: &VariableStore) -> Self {
        let mut watch_lists = KeyedVec::default();
        for _ in 0..store.num_domains() {
            let _ = watch_lists.push(Vec::new());
        }

        for (constraint, definition) in constraints.iter() {
            for (domain, events) in definition.subscriptions() {
                watch_lists.accomodate(domain, Vec::new());
                watch_lists[domain].push(Watcher { constraint, events });
            }
        }

        PropagationEngine {
            constraints,
            watch_lists,
            queue: PropagatorQueue::new(NUM_PRIORITY_LEVELS),
        }
    }

    /// Propagates every constraint until a fixed point is reached; used before search starts.
    pub(crate) fn propagate_root(
        &mut self,
        store: &mut VariableStore,
        statistics: &mut SearchStatistics,
    ) -> Result<(), Contradiction> {
        for (constraint, definition) in self.constraints.iter() {
            self.queue
                .enqueue_propagator(constraint, definition.priority());
        }
        self.propagate(store, statistics)
    }

    /// Propagates the constraints affected by the pending domain events until a fixed point is
    /// reached.
    ///
    /// On a contradiction the queue and the pending events are cleared; the domains are left as
    /// they are and should be restored by backtracking.
    pub(crate) fn propagate(
        &mut self,
        store: &mut VariableStore,
        statistics: &mut SearchStatistics,
    ) -> Result<(), Contradiction> {
        self.enqueue_watchers(store);

        while let Some(constraint) = self.queue.pop() {
            statistics.num_propagator_calls += 1;

            let definition = &self.constraints[constraint];
            if let Err(contradiction) = propagators::propagate(definition, store) {
                match contradiction {
                    Contradiction::EmptyDomain(domain) => {
                        trace!("{definition} emptied the domain of {}", store.name(domain))
                    }
                    Contradiction::Conflict(reason) => trace!("{definition} failed: {reason}"),
                }
                self.queue.clear();
                store.clear_events();
                return Err(contradiction);
            }

            self.enqueue_watchers(store);
        }

        Ok(())
    }

    fn enqueue_watchers(&mut self, store: &mut VariableStore) {
        for (domain, events) in store.drain_events() {
            for watcher in &self.watch_lists[domain] {
                if !watcher.events.is_disjoint(events) {
                    self.queue.enqueue_propagator(
                        watcher.constraint,
                        self.constraints[watcher.constraint].priority(),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::JobSpec;
    use crate::optimisation::Objective;

    fn engine_for(jobs: &[JobSpec], machines: usize) -> (VariableStore, PropagationEngine) {
        let store = VariableStore::create(jobs, machines).unwrap();
        let constraints = ConstraintSet::build(&store, Objective::TotalLateness);
        let engine = PropagationEngine::new(constraints, &store);
        (store, engine)
    }

    #[test]
    fn root_propagation_applies_releases_and_durations() {
        let (mut store, mut engine) = engine_for(
            &[JobSpec::new(0, 4).with_release(3).with_limit(5)],
            1,
        );
        let mut statistics = SearchStatistics::default();

        engine.propagate_root(&mut store, &mut statistics).unwrap();

        let job = store.jobs()[0].clone();
        assert_eq!(3, store.lower_bound(job.start));
        assert_eq!(7, store.lower_bound(job.end));
        assert_eq!(2, store.lower_bound(job.lateness));
        assert_eq!(1, store.lower_bound(job.presence[0]));
        assert_eq!(2, store.lower_bound(store.objective()));
        assert!(statistics.num_propagator_calls > 0);
    }

    #[test]
    fn assignment_propagates_to_other_flags_and_machine() {
        let (mut store, mut engine) = engine_for(
            &[JobSpec::new(0, 5), JobSpec::new(1, 5).with_limit(5)],
            2,
        );
        let mut statistics = SearchStatistics::default();
        engine.propagate_root(&mut store, &mut statistics).unwrap();

        let first = store.jobs()[0].clone();
        let second = store.jobs()[1].clone();

        store.new_checkpoint();
        let _ = store.tighten_lower_bound(first.presence[0], 1).unwrap();
        let _ = store.fix(first.start, 0).unwrap();
        let _ = store.tighten_lower_bound(second.presence[0], 1).unwrap();
        engine.propagate(&mut store, &mut statistics).unwrap();

        assert_eq!(0, store.upper_bound(first.presence[1]));
        assert_eq!(5, store.lower_bound(second.start));
        assert_eq!(5, store.lower_bound(store.objective()));
    }

    #[test]
    fn contradiction_is_reported_and_undone_by_backtracking() {
        let (mut store, mut engine) = engine_for(
            &[JobSpec::new(0, 5), JobSpec::new(1, 5)],
            1,
        );
        let mut statistics = SearchStatistics::default();
        engine.propagate_root(&mut store, &mut statistics).unwrap();

        let first = store.jobs()[0].clone();
        let second = store.jobs()[1].clone();

        store.new_checkpoint();
        let _ = store.fix(first.start, 0).unwrap();
        let _ = store.fix(second.start, 2).unwrap();
        assert!(engine.propagate(&mut store, &mut statistics).is_err());

        store.synchronise(0);
        assert_eq!(0, store.lower_bound(second.start));
        engine.propagate(&mut store, &mut statistics).unwrap();
    }
}
