mod disjunctive_propagator;
mod disjunctive_task;
mod theta_tree;

pub(crate) use disjunctive_propagator::propagate_no_overlap;
