use crate::basic_types::Contradiction;
use crate::engine::domains::Assignments;
use crate::engine::variables::IntDomainId;
use crate::engine::variables::SetDomainId;
#[cfg(doc)]
use crate::propagation::Propagator;

/// Gives read access to the domains of the solver.
pub(crate) trait HasAssignments {
    fn assignments(&self) -> &Assignments;
}

/// Read-only queries on the domains of set and integer variables.
///
/// Implemented by every context handed to a propagator.
#[allow(private_bounds, reason = "the assignments are an implementation detail")]
pub trait ReadDomains: HasAssignments {
    fn kernel_contains(&self, var: SetDomainId, value: i32) -> bool {
        self.assignments().set_domain(var).kernel_contains(value)
    }

    fn envelope_contains(&self, var: SetDomainId, value: i32) -> bool {
        self.assignments().set_domain(var).envelope_contains(value)
    }

    /// The values in the kernel of `var` in increasing order.
    fn kernel(&self, var: SetDomainId) -> impl Iterator<Item = i32> + '_ {
        self.assignments().set_domain(var).kernel()
    }

    /// The values in the envelope of `var` in increasing order.
    fn envelope(&self, var: SetDomainId) -> impl Iterator<Item = i32> + '_ {
        self.assignments().set_domain(var).envelope()
    }

    fn kernel_size(&self, var: SetDomainId) -> usize {
        self.assignments().set_domain(var).kernel_size()
    }

    fn envelope_size(&self, var: SetDomainId) -> usize {
        self.assignments().set_domain(var).envelope_size()
    }

    /// Returns whether the kernel of `var` equals its envelope.
    fn is_set_instantiated(&self, var: SetDomainId) -> bool {
        self.assignments().set_domain(var).is_instantiated()
    }

    /// The largest value in the kernel of `var`, if the kernel is non-empty.
    fn max_kernel(&self, var: SetDomainId) -> Option<i32> {
        self.assignments().set_domain(var).max_kernel()
    }

    fn lower_bound(&self, var: IntDomainId) -> i32 {
        self.assignments().int_domain(var).lower_bound()
    }

    fn upper_bound(&self, var: IntDomainId) -> i32 {
        self.assignments().int_domain(var).upper_bound()
    }

    fn is_fixed(&self, var: IntDomainId) -> bool {
        self.assignments().int_domain(var).is_fixed()
    }
}

impl<T: HasAssignments> ReadDomains for T {}

/// A read-only view on the domains, used for entailment checks and by constructors.
#[derive(Clone, Copy, Debug)]
pub struct Domains<'a> {
    assignments: &'a Assignments,
}

impl<'a> Domains<'a> {
    pub(crate) fn new(assignments: &'a Assignments) -> Self {
        Domains { assignments }
    }
}

impl HasAssignments for Domains<'_> {
    fn assignments(&self) -> &Assignments {
        self.assignments
    }
}

/// Provides information about the state of the solver to a propagator, and is the only way in
/// which a propagator changes domains.
///
/// Every change is recorded on the trail so that the solver can undo it, and produces an event
/// when the domain actually changed. A change which would empty a domain returns
/// [`Contradiction::EmptyDomain`] and leaves the domain as it was.
#[derive(Debug)]
pub struct PropagationContext<'a> {
    assignments: &'a mut Assignments,
    passive_requested: &'a mut bool,
}

impl<'a> PropagationContext<'a> {
    pub(crate) fn new(assignments: &'a mut Assignments, passive_requested: &'a mut bool) -> Self {
        PropagationContext {
            assignments,
            passive_requested,
        }
    }

    /// Get a read-only view on the current domains.
    pub fn domains(&self) -> Domains<'_> {
        Domains::new(self.assignments)
    }

    pub fn add_to_kernel(&mut self, var: SetDomainId, value: i32) -> Result<(), Contradiction> {
        self.assignments.add_to_kernel(var, value)
    }

    pub fn remove_from_envelope(
        &mut self,
        var: SetDomainId,
        value: i32,
    ) -> Result<(), Contradiction> {
        self.assignments.remove_from_envelope(var, value)
    }

    /// Raises the lower bound of `var` to `value`; does nothing if the bound is already at least
    /// `value`.
    pub fn set_lower_bound(&mut self, var: IntDomainId, value: i32) -> Result<(), Contradiction> {
        self.assignments.set_lower_bound(var, value)
    }

    /// Lowers the upper bound of `var` to `value`; does nothing if the bound is already at most
    /// `value`.
    pub fn set_upper_bound(&mut self, var: IntDomainId, value: i32) -> Result<(), Contradiction> {
        self.assignments.set_upper_bound(var, value)
    }

    /// Deactivates the [`Propagator`] until the solver backtracks to a checkpoint before the
    /// current one. A passive propagator is neither notified nor enqueued.
    ///
    /// Only request this once the constraint holds for every completion of the current domains.
    pub fn set_passive(&mut self) {
        *self.passive_requested = true;
    }
}

impl HasAssignments for PropagationContext<'_> {
    fn assignments(&self) -> &Assignments {
        self.assignments
    }
}
