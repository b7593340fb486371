use crate::create_statistics_struct;

create_statistics_struct!(
    /// The statistics gathered by the [`Solver`](crate::Solver) while propagating and enumerating
    /// solutions.
    SolverStatistics {
        /// The number of calls to `propagate_from_scratch`
        num_propagator_calls_from_scratch: u64,
        /// The number of calls to `propagate_incremental`, one per delta handed over
        num_incremental_propagator_calls: u64,
        /// The number of contradictions raised during propagation
        num_contradictions: u64,
        /// The number of branches taken during solution enumeration
        num_decisions: u64,
        num_solutions: u64,
    }
);
