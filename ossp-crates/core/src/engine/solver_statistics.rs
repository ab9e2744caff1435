use crate::create_statistics_struct;

create_statistics_struct!(
    /// Counters collected while solving a single instance.
    pub SearchStatistics {
        /// The number of decisions applied during search
        num_decisions: u64,
        /// The number of decisions whose propagation led to a contradiction
        num_conflicts: u64,
        /// The number of times an exhausted choice point was removed from the search
        num_backtracks: u64,
        /// The number of improving schedules found
        num_solutions: u64,
        /// The number of times a propagator was invoked
        num_propagator_calls: u64,
        /// The maximum number of open choice points
        max_depth: u64,
        /// The time spent solving, in milliseconds
        time_spent_in_solver_ms: u64,
    }
);
