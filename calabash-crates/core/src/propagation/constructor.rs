use super::Domains;
use super::LocalId;
use super::Propagator;
use super::PropagatorId;
use super::PropagatorVarId;
use crate::engine::domains::Assignments;
use crate::engine::notifications::DomainEvents;
use crate::engine::notifications::WatchList;
use crate::engine::variables::AnyDomainId;
#[cfg(doc)]
use crate::Solver;

/// A propagator constructor creates a fully initialized instance of a [`Propagator`].
///
/// The constructor is responsible for indicating on which events the propagator should be
/// enqueued. Additionally, the propagator can be initialized with values that come from the state
/// of the solver.
pub trait PropagatorConstructor {
    /// The propagator that is produced by this constructor.
    type PropagatorImpl: Propagator;

    /// Create the propagator instance from `Self`.
    fn create(self, context: PropagatorConstructorContext) -> Self::PropagatorImpl;
}

/// [`PropagatorConstructorContext`] is used when [`Propagator`]s are initialised after creation.
///
/// It represents a communication point between the [`Solver`] and the [`Propagator`].
/// Propagators use the [`PropagatorConstructorContext`] to register to domain changes
/// of variables and to retrieve the current domains of variables.
#[derive(Debug)]
pub struct PropagatorConstructorContext<'a> {
    watch_list: &'a mut WatchList,
    assignments: &'a Assignments,
    pub(crate) propagator_id: PropagatorId,
}

impl<'a> PropagatorConstructorContext<'a> {
    pub(crate) fn new(
        watch_list: &'a mut WatchList,
        assignments: &'a Assignments,
        propagator_id: PropagatorId,
    ) -> Self {
        PropagatorConstructorContext {
            watch_list,
            assignments,
            propagator_id,
        }
    }

    /// Get domain information.
    pub fn domains(&self) -> Domains<'_> {
        Domains::new(self.assignments)
    }

    /// Subscribes the propagator to the given [`DomainEvents`] of `var`.
    ///
    /// The changes are collected in the delta of the variable, which is passed to
    /// [`Propagator::propagate_incremental`] together with the [`LocalId`] to identify the
    /// variable.
    ///
    /// Each variable *must* have a unique [`LocalId`]. Most often this would be its index of the
    /// variable in the internal array of variables. Registering the same variable twice with the
    /// same [`LocalId`] merges the events.
    pub fn register(
        &mut self,
        var: impl Into<AnyDomainId>,
        domain_events: DomainEvents,
        local_id: LocalId,
    ) {
        let propagator_var = PropagatorVarId {
            propagator: self.propagator_id,
            variable: local_id,
        };

        self.watch_list
            .watch(var.into(), domain_events, propagator_var);
    }
}
