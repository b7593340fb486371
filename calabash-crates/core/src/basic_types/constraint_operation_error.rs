use thiserror::Error;

#[cfg(doc)]
use crate::Solver;

/// Errors related to adding constraints to the [`Solver`].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    #[error("Adding the propagator failed because it is infeasible at the root")]
    InfeasiblePropagator,
    #[error("Adding constraint failed because the solver is in an infeasible state")]
    InfeasibleState,
}
