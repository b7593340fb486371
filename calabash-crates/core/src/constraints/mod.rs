//! Defines the set constraints which can be added to the [`Solver`].
//!
//! A constraint is a relation over variables. In the solver, constraints are enforced through
//! propagators, and therefore constraints can be viewed as a collection of propagators.
//!
//! # Example
//! ```
//! # use calabash_core::constraints;
//! # use calabash_core::constraints::Constraint;
//! # use calabash_core::Solver;
//! let mut solver = Solver::default();
//!
//! let a = solver.new_set_variable(&[1], &[1, 2, 3]);
//! let b = solver.new_set_variable(&[1], &[1]);
//! let c = solver.new_set_variable(&[], &[1, 2, 3]);
//!
//! constraints::set_difference(a, b, c)
//!     .post(&mut solver)
//!     .expect("the constraint is satisfiable");
//!
//! assert_eq!(vec![2, 3], solver.envelope(c));
//! ```

use crate::basic_types::ConstraintOperationError;
use crate::engine::variables::IntDomainId;
use crate::engine::variables::SetDomainId;
use crate::propagation::PropagatorConstructor;
use crate::propagators::AtMostTransitiveClosureArgs;
use crate::propagators::SetDifferenceArgs;
use crate::propagators::SetStrictHighBoundArgs;
use crate::Solver;

/// A [`Constraint`] is a relation over variables. It disqualifies certain partial assignments of
/// making it into a solution of the problem.
pub trait Constraint {
    /// Add the [`Constraint`] to the [`Solver`].
    ///
    /// This method returns a [`ConstraintOperationError`] if the addition of the [`Constraint`] led
    /// to a root-level conflict.
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError>;
}

impl<ConcretePropagator> Constraint for ConcretePropagator
where
    ConcretePropagator: PropagatorConstructor,
{
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        let _ = solver.add_propagator(self)?;
        Ok(())
    }
}

impl<C: Constraint> Constraint for Vec<C> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        self.into_iter().try_for_each(|c| c.post(solver))
    }
}

/// Creates the [`Constraint`] `minuend \ subtrahend = difference`.
pub fn set_difference(
    minuend: SetDomainId,
    subtrahend: SetDomainId,
    difference: SetDomainId,
) -> impl Constraint {
    SetDifferenceArgs {
        minuend,
        subtrahend,
        difference,
    }
}

/// Creates the [`Constraint`] that every element of `set` is strictly smaller than `bound`.
pub fn set_strict_high_bound(set: SetDomainId, bound: IntDomainId) -> impl Constraint {
    SetStrictHighBoundArgs { set, bound }
}

/// Creates the [`Constraint`] that `closure[i]` only contains nodes reachable from node `i`
/// through the edges `i → j` for `j ∈ relation[i]`. With `reflexive`, every node may contain
/// itself.
///
/// Both arrays need the same length `n`; the nodes are `0..n`.
pub fn at_most_transitive_closure(
    relation: impl Into<Box<[SetDomainId]>>,
    closure: impl Into<Box<[SetDomainId]>>,
    reflexive: bool,
) -> impl Constraint {
    AtMostTransitiveClosureArgs {
        relation: relation.into(),
        closure: closure.into(),
        reflexive,
    }
}
