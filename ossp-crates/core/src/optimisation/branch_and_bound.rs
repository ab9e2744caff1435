use std::time::Instant;

use log::debug;
use log::trace;

use super::Objective;
use super::SolutionCallback;
use crate::basic_types::Contradiction;
use crate::basic_types::Schedule;
use crate::branching::Brancher;
use crate::branching::Decision;
use crate::engine::extract_schedule;
use crate::engine::PropagationEngine;
use crate::engine::SearchStatistics;
use crate::engine::VariableStore;
use crate::ossp_assert_moderate;
use crate::ossp_assert_simple;
use crate::results::OptimisationResult;
use crate::termination::TerminationCondition;

/// The alternatives of a node in the search tree which have not been explored yet.
#[derive(Debug)]
struct ChoicePoint {
    alternatives: Vec<Decision>,
    next: usize,
}

impl ChoicePoint {
    fn new(alternatives: Vec<Decision>) -> Self {
        ChoicePoint {
            alternatives,
            next: 0,
        }
    }

    fn next_alternative(&mut self) -> Option<Decision> {
        let decision = self.alternatives.get(self.next).copied()?;
        self.next += 1;
        Some(decision)
    }
}

/// Depth-first branch-and-bound over the decisions of a [`Brancher`].
///
/// Every time a complete schedule is found it becomes the incumbent, and every node explored
/// afterwards requires the objective to be strictly smaller than the incumbent value. The search
/// keeps an explicit stack of choice points; choice point `i` applies its decisions on top of
/// checkpoint `i` of the store.
#[derive(Debug)]
pub(crate) struct BranchAndBound {
    objective: Objective,
    statistics: SearchStatistics,
    incumbent: Option<Schedule>,
}

impl BranchAndBound {
    pub(crate) fn new(objective: Objective) -> Self {
        BranchAndBound {
            objective,
            statistics: SearchStatistics::default(),
            incumbent: None,
        }
    }

    pub(crate) fn statistics(&self) -> SearchStatistics {
        self.statistics
    }

    pub(crate) fn optimise(
        &mut self,
        store: &mut VariableStore,
        engine: &mut PropagationEngine,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
        solution_callback: &mut impl SolutionCallback,
    ) -> OptimisationResult {
        let started_at = Instant::now();

        let exhausted = match engine.propagate_root(store, &mut self.statistics) {
            Ok(()) => self.search(store, engine, brancher, termination, solution_callback),
            Err(contradiction) => {
                debug!("Root propagation failed with {contradiction:?}");
                true
            }
        };

        store.synchronise(0);
        self.statistics.time_spent_in_solver_ms = started_at.elapsed().as_millis() as u64;

        match (self.incumbent.take(), exhausted) {
            (Some(schedule), true) => OptimisationResult::Optimal(schedule),
            (Some(schedule), false) => OptimisationResult::Feasible(schedule),
            (None, true) => OptimisationResult::Infeasible,
            (None, false) => OptimisationResult::Unknown,
        }
    }

    /// Explores the search tree below the root; returns whether it was exhausted.
    fn search(
        &mut self,
        store: &mut VariableStore,
        engine: &mut PropagationEngine,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
        solution_callback: &mut impl SolutionCallback,
    ) -> bool {
        let mut stack: Vec<ChoicePoint> = Vec::new();

        'search: loop {
            if termination.should_stop() {
                return false;
            }

            match brancher.next_choice_point(store) {
                Some(alternatives) => {
                    stack.push(ChoicePoint::new(alternatives));
                    self.statistics.max_depth = self.statistics.max_depth.max(stack.len() as u64);
                }
                None => {
                    if self.on_solution(store, solution_callback).is_break() {
                        return false;
                    }
                }
            }

            loop {
                let Some(next) = stack.last_mut().map(ChoicePoint::next_alternative) else {
                    return true;
                };

                store.synchronise(stack.len() - 1);
                ossp_assert_moderate!(store.get_checkpoint() == stack.len() - 1);

                let Some(decision) = next else {
                    let _ = stack.pop();
                    self.statistics.num_backtracks += 1;
                    continue;
                };

                store.new_checkpoint();
                self.statistics.num_decisions += 1;
                termination.decision_has_been_made();

                match self.apply(decision, store, engine) {
                    Ok(()) => continue 'search,
                    Err(contradiction) => {
                        trace!("Decision {decision} failed with {contradiction:?}");
                        self.statistics.num_conflicts += 1;
                    }
                }
            }
        }
    }

    fn apply(
        &mut self,
        decision: Decision,
        store: &mut VariableStore,
        engine: &mut PropagationEngine,
    ) -> Result<(), Contradiction> {
        decision.apply(store)?;

        if let Some(incumbent) = &self.incumbent {
            let _ = store.tighten_upper_bound(store.objective(), incumbent.objective_value() - 1)?;
        }

        engine.propagate(store, &mut self.statistics)
    }

    fn on_solution(
        &mut self,
        store: &VariableStore,
        solution_callback: &mut impl SolutionCallback,
    ) -> std::ops::ControlFlow<()> {
        let schedule = extract_schedule(store, self.objective);

        ossp_assert_simple!(
            self.incumbent
                .as_ref()
                .map_or(true, |incumbent| schedule.objective_value()
                    < incumbent.objective_value()),
            "every new schedule should improve on the incumbent"
        );

        self.statistics.num_solutions += 1;
        debug!(
            "Found a schedule with {} {} after {} decisions",
            self.objective,
            schedule.objective_value(),
            self.statistics.num_decisions
        );

        let control_flow = solution_callback.on_solution_callback(&schedule);
        self.incumbent = Some(schedule);
        control_flow
    }
}
