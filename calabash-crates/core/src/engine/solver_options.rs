#[cfg(doc)]
use crate::propagation::Priority;
#[cfg(doc)]
use crate::propagation::Propagator;
#[cfg(doc)]
use crate::Solver;

/// Options which influence how the [`Solver`] drives its propagators.
#[derive(Debug, Clone, Copy)]
pub struct SolverOptions {
    /// Whether [`Propagator::propagate_incremental`] is used when deltas are available. When
    /// disabled, every call is a [`Propagator::propagate_from_scratch`]; the fixpoint is the same
    /// either way.
    pub incremental_propagation: bool,
    /// The number of priority levels of the propagator queue; has to cover every [`Priority`].
    pub num_priority_levels: u32,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            incremental_propagation: true,
            num_priority_levels: 4,
        }
    }
}
