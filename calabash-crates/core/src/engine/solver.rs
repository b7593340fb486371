use log::debug;
use log::trace;

use super::domains::Assignments;
use super::notifications::Delta;
use super::notifications::WatchList;
use super::variables::IntDomainId;
use super::variables::SetDomainId;
use super::PropagatorQueue;
use super::SolverOptions;
use super::SolverStatistics;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::Contradiction;
use crate::basic_types::Entailment;
use crate::basic_types::PropagationStatus;
use crate::basic_types::Trail;
use crate::calabash_assert_eq_simple;
use crate::calabash_assert_simple;
use crate::calabash_extreme_checks_enabled;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::propagation::store::PropagatorStore;
use crate::propagation::Domains;
use crate::propagation::LocalId;
use crate::propagation::PropagationContext;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::propagation::PropagatorHandle;
use crate::propagation::PropagatorId;
use crate::propagation::PropagatorVarId;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// The host of the propagators: it owns every variable, schedules the propagators until a
/// fixpoint is reached, and undoes domain changes when backtracking.
///
/// # Example
/// ```rust
/// # use calabash_core::constraints;
/// # use calabash_core::constraints::Constraint;
/// # use calabash_core::Solver;
/// let mut solver = Solver::default();
///
/// let set = solver.new_set_variable(&[5], &[1, 5, 8]);
/// let bound = solver.new_integer_variable(0, 7);
///
/// constraints::set_strict_high_bound(set, bound)
///     .post(&mut solver)
///     .expect("the constraint is satisfiable");
///
/// // Every element of the set is strictly smaller than the bound.
/// assert_eq!(6, solver.lower_bound(bound));
/// assert_eq!(vec![1, 5], solver.envelope(set));
/// ```
#[derive(Debug)]
pub struct Solver {
    assignments: Assignments,
    propagators: PropagatorStore,
    watch_list: WatchList,
    queue: PropagatorQueue,
    /// For every propagator, the changes to each of its watched variables which it has not seen
    /// yet.
    deltas: KeyedVec<PropagatorId, KeyedVec<LocalId, Delta>>,
    /// Propagators which have to be called from scratch on their next call, e.g. because they
    /// were just added or because the solver backtracked.
    requires_full_propagation: KeyedVec<PropagatorId, bool>,
    is_passive: KeyedVec<PropagatorId, bool>,
    /// The propagators which became passive, so that they can be reactivated upon backtracking.
    passive_trail: Trail<PropagatorId>,
    /// Set when a propagator posted at the root turned out to be unsatisfiable.
    is_infeasible: bool,
    options: SolverOptions,
    pub(crate) statistics: SolverStatistics,
}

impl Default for Solver {
    fn default() -> Self {
        Solver::with_options(SolverOptions::default())
    }
}

impl Solver {
    pub fn with_options(options: SolverOptions) -> Solver {
        calabash_assert_simple!(
            options.num_priority_levels >= 4,
            "every priority needs its own level in the propagator queue"
        );

        Solver {
            assignments: Assignments::default(),
            propagators: PropagatorStore::default(),
            watch_list: WatchList::default(),
            queue: PropagatorQueue::new(options.num_priority_levels),
            deltas: KeyedVec::default(),
            requires_full_propagation: KeyedVec::default(),
            is_passive: KeyedVec::default(),
            passive_trail: Trail::default(),
            is_infeasible: false,
            options,
            statistics: SolverStatistics::default(),
        }
    }

    /// Creates a set variable with the given kernel and envelope. The kernel has to be a subset of
    /// the envelope; duplicates are ignored.
    pub fn new_set_variable(&mut self, kernel: &[i32], envelope: &[i32]) -> SetDomainId {
        self.watch_list.grow_set();
        self.assignments.grow_set(kernel, envelope)
    }

    /// Creates an integer variable with the domain `[lower_bound, upper_bound]`.
    pub fn new_integer_variable(&mut self, lower_bound: i32, upper_bound: i32) -> IntDomainId {
        calabash_assert_simple!(lower_bound <= upper_bound);

        self.watch_list.grow_int();
        self.assignments.grow_int(lower_bound, upper_bound)
    }

    /// Adds a propagator to the solver and propagates to a fixpoint.
    ///
    /// If the propagation runs into a contradiction at the root, the solver is marked as
    /// infeasible and every later call returns [`ConstraintOperationError::InfeasibleState`].
    pub fn add_propagator<Constructor>(
        &mut self,
        constructor: Constructor,
    ) -> Result<PropagatorHandle<Constructor::PropagatorImpl>, ConstraintOperationError>
    where
        Constructor: PropagatorConstructor,
    {
        if self.is_infeasible {
            return Err(ConstraintOperationError::InfeasibleState);
        }

        let propagator_id = self.propagators.next_id();

        let constructor_context =
            PropagatorConstructorContext::new(&mut self.watch_list, &self.assignments, propagator_id);
        let propagator = constructor.create(constructor_context);
        let priority = propagator.priority();

        debug!("Adding propagator {propagator} as {propagator_id} with priority {priority:?}");
        let handle = self.propagators.add(propagator_id, propagator);

        self.deltas.accomodate(propagator_id, KeyedVec::default());
        self.requires_full_propagation.accomodate(propagator_id, true);
        self.is_passive.accomodate(propagator_id, false);

        self.queue.enqueue_propagator(propagator_id, priority);

        if self.propagate().is_err() {
            if self.get_checkpoint() == 0 {
                self.is_infeasible = true;
            }
            return Err(ConstraintOperationError::InfeasiblePropagator);
        }

        Ok(handle)
    }

    /// Returns the propagator behind the handle.
    pub fn get_propagator<P: Propagator>(&self, handle: PropagatorHandle<P>) -> Option<&P> {
        self.propagators.get_propagator(handle)
    }

    /// Runs the enqueued propagators until none of them can change a domain, or until one of them
    /// raises a [`Contradiction`].
    ///
    /// Changes made through [`Solver::add_to_kernel`] and friends since the previous call are
    /// delivered to the propagators first. After a contradiction the caller is expected to
    /// [`Solver::backtrack`].
    pub fn propagate(&mut self) -> PropagationStatus {
        self.notify_propagators();

        while let Some(propagator_id) = self.queue.pop() {
            if let Err(contradiction) = self.run_propagator(propagator_id) {
                self.statistics.num_contradictions += 1;
                debug!(
                    "{} ({propagator_id}) raised a contradiction: {contradiction}",
                    &self.propagators[propagator_id]
                );

                self.clear_pending_changes();
                return Err(contradiction);
            }

            self.notify_propagators();
        }

        if calabash_extreme_checks_enabled!() {
            self.check_fixpoint();
        }

        Ok(())
    }

    fn run_propagator(&mut self, propagator_id: PropagatorId) -> PropagationStatus {
        let mut passive_requested = false;
        let propagator = &mut self.propagators[propagator_id];

        if !self.options.incremental_propagation || self.requires_full_propagation[propagator_id]
        {
            self.requires_full_propagation[propagator_id] = false;
            self.deltas[propagator_id]
                .iter_mut()
                .for_each(Delta::clear);

            self.statistics.num_propagator_calls_from_scratch += 1;
            propagator.propagate_from_scratch(PropagationContext::new(
                &mut self.assignments,
                &mut passive_requested,
            ))?;
        } else {
            for index in 0..self.deltas[propagator_id].len() {
                let local_id = LocalId::create_from_index(index);
                let delta = std::mem::take(&mut self.deltas[propagator_id][local_id]);
                if delta.is_empty() {
                    continue;
                }

                self.statistics.num_incremental_propagator_calls += 1;
                propagator.propagate_incremental(
                    PropagationContext::new(&mut self.assignments, &mut passive_requested),
                    local_id,
                    delta,
                )?;

                if passive_requested {
                    break;
                }
            }
        }

        if passive_requested {
            trace!("{propagator_id} became passive");
            self.is_passive[propagator_id] = true;
            self.passive_trail.push(propagator_id);
            self.deltas[propagator_id]
                .iter_mut()
                .for_each(Delta::clear);
        }

        Ok(())
    }

    /// Moves the events collected in the event sink into the deltas of the propagators which watch
    /// them, and enqueues those propagators.
    fn notify_propagators(&mut self) {
        for (event, domain, value) in self.assignments.events().drain() {
            for watcher in self.watch_list.get_watchers(domain) {
                if !watcher.events.contains(event) {
                    continue;
                }

                let PropagatorVarId {
                    propagator,
                    variable,
                } = watcher.propagator_var;

                if self.is_passive[propagator] {
                    continue;
                }

                if !self.requires_full_propagation[propagator] {
                    let deltas = &mut self.deltas[propagator];
                    deltas.accomodate(variable, Delta::default());
                    deltas[variable].push(event, value);
                }

                self.queue
                    .enqueue_propagator(propagator, self.propagators[propagator].priority());
            }
        }
    }

    fn clear_pending_changes(&mut self) {
        self.queue.clear();
        self.deltas
            .iter_mut()
            .flat_map(|deltas| deltas.iter_mut())
            .for_each(Delta::clear);
        self.assignments.events().clear();
    }

    /// Calls every active propagator from scratch and asserts that none of them changes a
    /// domain; the changes made during the check are undone.
    fn check_fixpoint(&mut self) {
        let checkpoint = self.assignments.get_checkpoint();

        for index in 0..self.propagators.num_propagators() {
            let propagator_id = PropagatorId::create_from_index(index);
            if self.is_passive[propagator_id] {
                continue;
            }

            self.assignments.new_checkpoint();
            let mut passive_requested = false;
            let status = self.propagators[propagator_id].propagate_from_scratch(
                PropagationContext::new(&mut self.assignments, &mut passive_requested),
            );
            let num_changes = self.assignments.events().drain().count();

            calabash_assert_simple!(
                status.is_ok(),
                "{} raised a contradiction at a fixpoint",
                &self.propagators[propagator_id]
            );
            calabash_assert_eq_simple!(
                0,
                num_changes,
                "{} is not idempotent",
                &self.propagators[propagator_id]
            );

            self.assignments.synchronise(checkpoint);
        }
    }

    /// Calls the propagator behind `handle` from scratch twice on the current domains, and returns
    /// the number of domain changes made by the second call. Pending events are consumed by the
    /// first call; the changes of both calls are undone afterwards.
    #[cfg(test)]
    pub(crate) fn num_changes_of_repeated_call<P>(
        &mut self,
        handle: PropagatorHandle<P>,
    ) -> Result<usize, Contradiction> {
        let checkpoint = self.assignments.get_checkpoint();
        self.assignments.new_checkpoint();

        let propagator = &mut self.propagators[handle.propagator_id()];
        let mut passive_requested = false;
        let first_call = propagator.propagate_from_scratch(PropagationContext::new(
            &mut self.assignments,
            &mut passive_requested,
        ));
        let _ = self.assignments.events().drain().count();

        let result = match first_call {
            Ok(()) => propagator
                .propagate_from_scratch(PropagationContext::new(
                    &mut self.assignments,
                    &mut passive_requested,
                ))
                .map(|()| self.assignments.events().drain().count()),
            Err(contradiction) => Err(contradiction),
        };

        self.assignments.synchronise(checkpoint);
        result
    }

    /// Creates a checkpoint to which the solver can later [`Solver::backtrack`].
    pub fn new_checkpoint(&mut self) {
        self.assignments.new_checkpoint();
        self.passive_trail.new_checkpoint();
    }

    /// The number of checkpoints which are currently open.
    pub fn get_checkpoint(&self) -> usize {
        self.assignments.get_checkpoint()
    }

    /// Restores the domains and the passive propagators to the state they had when `checkpoint`
    /// was created.
    ///
    /// Pending deltas are discarded. Every active propagator is enqueued to be called from
    /// scratch, so that changes at or below `checkpoint` which were not propagated yet are still
    /// taken into account by the next [`Solver::propagate`].
    pub fn backtrack(&mut self, checkpoint: usize) {
        calabash_assert_simple!(checkpoint <= self.get_checkpoint());

        if checkpoint < self.get_checkpoint() {
            trace!(
                "Backtracking from checkpoint {} to {checkpoint}",
                self.get_checkpoint()
            );

            self.assignments.synchronise(checkpoint);
            for propagator_id in self.passive_trail.synchronise(checkpoint) {
                self.is_passive[propagator_id] = false;
            }
        }

        self.clear_pending_changes();
        for propagator_id in self.propagators.propagator_ids() {
            self.requires_full_propagation[propagator_id] = true;
            if !self.is_passive[propagator_id] {
                self.queue
                    .enqueue_propagator(propagator_id, self.propagators[propagator_id].priority());
            }
        }
    }

    /// Adds `value` to the kernel of `var`. The propagators are informed on the next call to
    /// [`Solver::propagate`].
    pub fn add_to_kernel(&mut self, var: SetDomainId, value: i32) -> Result<(), Contradiction> {
        self.assignments.add_to_kernel(var, value)
    }

    /// Removes `value` from the envelope of `var`. The propagators are informed on the next call
    /// to [`Solver::propagate`].
    pub fn remove_from_envelope(
        &mut self,
        var: SetDomainId,
        value: i32,
    ) -> Result<(), Contradiction> {
        self.assignments.remove_from_envelope(var, value)
    }

    pub fn set_lower_bound(&mut self, var: IntDomainId, value: i32) -> Result<(), Contradiction> {
        self.assignments.set_lower_bound(var, value)
    }

    pub fn set_upper_bound(&mut self, var: IntDomainId, value: i32) -> Result<(), Contradiction> {
        self.assignments.set_upper_bound(var, value)
    }

    /// A read-only view on the current domains.
    pub fn domains(&self) -> Domains<'_> {
        Domains::new(&self.assignments)
    }

    /// The kernel of `var` in increasing order.
    pub fn kernel(&self, var: SetDomainId) -> Vec<i32> {
        self.assignments.set_domain(var).kernel().collect()
    }

    /// The envelope of `var` in increasing order.
    pub fn envelope(&self, var: SetDomainId) -> Vec<i32> {
        self.assignments.set_domain(var).envelope().collect()
    }

    pub fn lower_bound(&self, var: IntDomainId) -> i32 {
        self.assignments.int_domain(var).lower_bound()
    }

    pub fn upper_bound(&self, var: IntDomainId) -> i32 {
        self.assignments.int_domain(var).upper_bound()
    }

    /// Whether the propagator behind `handle` is deactivated until the next backtrack.
    pub fn is_passive<P>(&self, handle: PropagatorHandle<P>) -> bool {
        self.is_passive[handle.propagator_id()]
    }

    /// The entailment of the constraint of a single propagator under the current domains.
    pub fn entailment<P>(&self, handle: PropagatorHandle<P>) -> Entailment {
        self.propagators[handle.propagator_id()].is_entailed(self.domains())
    }

    /// The entailment of the conjunction of all constraints; [`Entailment::Satisfied`] when there
    /// are no propagators.
    pub fn entailment_of_all(&self) -> Entailment {
        self.propagators
            .propagator_ids()
            .map(|propagator_id| self.propagators[propagator_id].is_entailed(self.domains()))
            .fold(Entailment::Satisfied, Entailment::and)
    }

    pub fn num_propagators(&self) -> usize {
        self.propagators.num_propagators()
    }

    pub fn num_set_variables(&self) -> usize {
        self.assignments.num_set_domains()
    }

    pub fn num_integer_variables(&self) -> usize {
        self.assignments.num_int_domains()
    }

    pub(crate) fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    pub(crate) fn is_infeasible(&self) -> bool {
        self.is_infeasible
    }

    pub fn statistics(&self) -> SolverStatistics {
        self.statistics
    }

    /// Logs the statistics of the solver through the configured statistic logging, followed by
    /// the closing line.
    pub fn log_statistics(&self) {
        if !should_log_statistics() {
            return;
        }

        self.statistics.log(StatisticLogger::default());
        log_statistic_postfix();
    }
}
