//! Filtering algorithms for the [`Constraint`]s of the model.
//!
//! Every propagator narrows the bounds in the [`VariableStore`] and reports whether anything
//! changed, or fails with a [`Contradiction`](crate::basic_types::Contradiction) when the current
//! domains cannot satisfy the constraint.
mod disjunctive;
mod exactly_one;
mod lateness;
mod objective;
mod processing_time;
mod release_bound;

use disjunctive::propagate_no_overlap;
use exactly_one::propagate_exactly_one;
use lateness::propagate_lateness;
use objective::propagate_objective_max;
use objective::propagate_objective_sum;
use processing_time::propagate_interval_link;
use processing_time::propagate_processing_time;
use release_bound::propagate_release_bound;

use crate::basic_types::PropagationStatus;
use crate::constraints::Constraint;
use crate::engine::VariableStore;

pub(crate) fn propagate(constraint: &Constraint, store: &mut VariableStore) -> PropagationStatus {
    match constraint {
        Constraint::ReleaseBound { start, release } => {
            propagate_release_bound(store, *start, *release)
        }
        Constraint::ProcessingTime {
            start,
            end,
            duration,
        } => propagate_processing_time(store, *start, *end, *duration),
        Constraint::IntervalLink { interval } => propagate_interval_link(store, interval),
        Constraint::LatenessDefinition {
            end,
            lateness,
            limit,
        } => propagate_lateness(store, *end, *lateness, *limit),
        Constraint::ExactlyOne { flags } => propagate_exactly_one(store, flags),
        Constraint::NoOverlap { intervals, .. } => propagate_no_overlap(store, intervals),
        Constraint::ObjectiveSum { objective, terms } => {
            propagate_objective_sum(store, *objective, terms)
        }
        Constraint::ObjectiveMax { objective, terms } => {
            propagate_objective_max(store, *objective, terms)
        }
    }
}
