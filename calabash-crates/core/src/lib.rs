//! # Calabash
//! The set-domain propagation engine of the Calabash constraint solver.
//!
//! Set variables are represented by a kernel (the values which are certainly in the set) and an
//! envelope (the values which may be in the set). The [`Solver`] owns these domains together with
//! integer bound variables, and drives the propagators of the posted constraints to a fixpoint:
//! - [`constraints::set_difference`] enforces `minuend \ subtrahend = difference`;
//! - [`constraints::set_strict_high_bound`] enforces that every element of a set is smaller than
//!   an integer variable;
//! - [`constraints::at_most_transitive_closure`] bounds a family of closure sets by the nodes
//!   reachable through a family of relation sets.
//!
//! # Example
//! ```rust
//! # use calabash_core::constraints;
//! # use calabash_core::constraints::Constraint;
//! # use calabash_core::Solver;
//! let mut solver = Solver::default();
//!
//! // 0 → 1 → 2
//! let relation = [
//!     solver.new_set_variable(&[1], &[1]),
//!     solver.new_set_variable(&[], &[2]),
//!     solver.new_set_variable(&[], &[]),
//! ];
//! let closure = [
//!     solver.new_set_variable(&[], &[0, 1, 2]),
//!     solver.new_set_variable(&[], &[0, 1, 2]),
//!     solver.new_set_variable(&[], &[0, 1, 2]),
//! ];
//!
//! constraints::at_most_transitive_closure(relation, closure, false)
//!     .post(&mut solver)
//!     .expect("the constraint is satisfiable");
//!
//! assert_eq!(vec![1, 2], solver.envelope(closure[0]));
//! assert_eq!(vec![2], solver.envelope(closure[1]));
//!
//! // With the edge 1 → 2, the closures of 0 and 1 range over the subsets of {1, 2} and {2}.
//! // Without it, only the closure of 0 may contain 1.
//! assert_eq!(4 * 2 + 2, solver.for_each_solution(|_| {}));
//! ```
pub mod basic_types;
pub mod constraints;
pub mod containers;
pub mod engine;
pub mod propagation;
pub mod propagators;
pub mod statistics;

#[doc(hidden)]
pub mod asserts;

pub use convert_case;

pub use crate::basic_types::ConstraintOperationError;
pub use crate::basic_types::Contradiction;
pub use crate::basic_types::Entailment;
pub use crate::basic_types::PropagationStatus;
pub use crate::basic_types::Solution;
pub use crate::engine::variables;
pub use crate::engine::Solver;
pub use crate::engine::SolverOptions;
pub use crate::engine::SolverStatistics;
pub use crate::propagation::PropagatorHandle;
