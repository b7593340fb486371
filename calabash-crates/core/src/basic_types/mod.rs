mod constraint_operation_error;
mod entailment;
mod propagation_status;
mod solution;
mod trail;

pub use constraint_operation_error::ConstraintOperationError;
pub use entailment::Entailment;
pub use propagation_status::Contradiction;
pub use propagation_status::PropagationStatus;
pub use solution::Solution;
pub(crate) use trail::Trail;
