mod domain_events;
mod propagation_engine;
mod propagator_queue;
mod solution_extractor;
mod solver_statistics;
mod variable_store;
pub(crate) mod variables;

pub(crate) use domain_events::DomainEvent;
pub(crate) use propagation_engine::PropagationEngine;
pub(crate) use solution_extractor::extract_schedule;
pub use solver_statistics::SearchStatistics;
pub(crate) use variable_store::VariableStore;
