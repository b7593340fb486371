//! The engine which hosts the propagators: variables and their trailed domains, the notification
//! of domain changes, the propagator queue and the [`Solver`] driving all of it.
pub(crate) mod domains;
pub mod notifications;
pub mod variables;

mod propagator_queue;
mod search;
mod solver;
mod solver_options;
mod solver_statistics;

pub(crate) use propagator_queue::PropagatorQueue;
pub use solver::Solver;
pub use solver_options::SolverOptions;
pub use solver_statistics::SolverStatistics;
