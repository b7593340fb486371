use std::fmt::Display;

use downcast_rs::impl_downcast;
use downcast_rs::Downcast;

use super::Domains;
use super::LocalId;
use super::PropagationContext;
use crate::basic_types::Entailment;
use crate::basic_types::PropagationStatus;
use crate::engine::notifications::Delta;
#[cfg(doc)]
use crate::engine::notifications::DomainEvent;
#[cfg(doc)]
use crate::propagation::PropagatorConstructor;
#[cfg(doc)]
use crate::propagation::PropagatorConstructorContext;

// Lets the solver hand out the concrete propagator behind a `PropagatorHandle`.
impl_downcast!(Propagator);

/// Narrows the domains of the variables of one constraint, or reports a
/// [`Contradiction`](crate::basic_types::Contradiction) when no completion of the domains
/// satisfies it.
///
/// Narrowing grows kernels, shrinks envelopes and tightens integer bounds. Changes are only ever
/// undone by the solver when it backtracks.
///
/// [`Display`] renders the constraint with its operands (`s0 \ s1 = s2`); [`Propagator::name`]
/// names the kind of constraint.
pub trait Propagator: Downcast + Display {
    fn name(&self) -> &str;

    /// The queue level of the propagator. Cheap propagators should run before expensive ones;
    /// the fixpoint does not depend on it.
    fn priority(&self) -> Priority {
        Priority::VeryLow
    }

    /// Narrows the domains looking only at their current state.
    ///
    /// Used on the first call, after every backtrack, and whenever incremental propagation is
    /// disabled. One call reaches the fixpoint of this propagator: a second call without
    /// intermediate changes does nothing.
    fn propagate_from_scratch(&mut self, context: PropagationContext) -> PropagationStatus;

    /// Narrows the domains in response to the [`Delta`] of the variable registered under
    /// `local_id` (see [`PropagatorConstructorContext::register`]). The delta holds each change
    /// of a subscribed [`DomainEvent`] exactly once.
    ///
    /// Has to end in the same state as [`Propagator::propagate_from_scratch`], which it calls
    /// unless overridden.
    fn propagate_incremental(
        &mut self,
        context: PropagationContext,
        _local_id: LocalId,
        _delta: Delta,
    ) -> PropagationStatus {
        self.propagate_from_scratch(context)
    }

    /// Whether every completion of the current domains satisfies the constraint, none does, or
    /// it is not known yet.
    fn is_entailed(&self, domains: Domains) -> Entailment;
}

/// The queue level of a propagator; all propagators of a higher level run before any of a lower
/// level, and within a level they run in the order in which they were enqueued.
#[derive(Default, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Priority {
    /// Constant or linear in a single variable.
    High = 0,
    /// Linear in the size of the domains.
    Medium = 1,
    Low = 2,
    /// Superlinear, such as graph algorithms over all variables.
    #[default]
    VeryLow = 3,
}
