//! The dual-bound representation of a set variable.
//!
//! A set domain is described by its kernel (the values which are definitely in the set) and its
//! envelope (the values which may be in the set), with `kernel ⊆ envelope`. During search the
//! kernel only grows and the envelope only shrinks; the domain is *instantiated* once both
//! coincide.
//!
//! Only the values of the original envelope are stored, sorted, each with its own state.
//! Membership queries and updates take O(log n) in the size of the original envelope, so values far
//! apart (even `i32::MIN` and `i32::MAX`) cost no more than neighbouring ones. Iteration visits the
//! values in increasing order.

use crate::basic_types::Contradiction;
use crate::calabash_assert_moderate;
use crate::calabash_assert_simple;

/// The status of a single value of the original envelope.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub(crate) enum ElementState {
    /// Not in the envelope (and therefore not in the kernel).
    Excluded,
    /// In the envelope but not in the kernel.
    Possible,
    /// In the kernel (and therefore in the envelope).
    Required,
}

impl ElementState {
    /// How much this state contributes to the (kernel size, envelope size).
    fn contribution(self) -> (usize, usize) {
        match self {
            ElementState::Excluded => (0, 0),
            ElementState::Possible => (0, 1),
            ElementState::Required => (1, 1),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct SetDomain {
    /// The original envelope, sorted and without duplicates.
    values: Box<[i32]>,
    /// The state of `values[i]`.
    states: Box<[ElementState]>,
    kernel_size: usize,
    envelope_size: usize,
}

impl SetDomain {
    /// Creates the domain; every value of `kernel` has to be part of `envelope`. Duplicate values
    /// are ignored.
    pub(crate) fn new(kernel: &[i32], envelope: &[i32]) -> SetDomain {
        let mut values = envelope.to_vec();
        values.sort_unstable();
        values.dedup();

        let mut domain = SetDomain {
            states: vec![ElementState::Possible; values.len()].into_boxed_slice(),
            kernel_size: 0,
            envelope_size: values.len(),
            values: values.into_boxed_slice(),
        };

        for &value in kernel {
            calabash_assert_simple!(
                domain.envelope_contains(value),
                "The kernel value {value} is not part of the envelope"
            );
            if domain.envelope_contains(value) {
                let _ = domain.set_state(value, ElementState::Required);
            }
        }

        domain
    }

    fn index_of(&self, value: i32) -> Option<usize> {
        self.values.binary_search(&value).ok()
    }

    fn state(&self, value: i32) -> ElementState {
        self.index_of(value)
            .map(|index| self.states[index])
            .unwrap_or(ElementState::Excluded)
    }

    /// Overwrites the state of `value` and returns its previous state.
    fn set_state(&mut self, value: i32, state: ElementState) -> ElementState {
        let Some(index) = self.index_of(value) else {
            calabash_assert_simple!(
                state == ElementState::Excluded,
                "{value} is not part of the original envelope"
            );
            return ElementState::Excluded;
        };
        let previous = self.states[index];

        let (previous_kernel, previous_envelope) = previous.contribution();
        let (kernel, envelope) = state.contribution();
        self.kernel_size = self.kernel_size + kernel - previous_kernel;
        self.envelope_size = self.envelope_size + envelope - previous_envelope;
        self.states[index] = state;

        previous
    }

    pub(crate) fn kernel_contains(&self, value: i32) -> bool {
        self.state(value) == ElementState::Required
    }

    pub(crate) fn envelope_contains(&self, value: i32) -> bool {
        self.state(value) != ElementState::Excluded
    }

    pub(crate) fn kernel(&self) -> impl Iterator<Item = i32> + '_ {
        self.values_with(|state| state == ElementState::Required)
    }

    pub(crate) fn envelope(&self) -> impl Iterator<Item = i32> + '_ {
        self.values_with(|state| state != ElementState::Excluded)
    }

    fn values_with(
        &self,
        predicate: impl Fn(ElementState) -> bool + 'static,
    ) -> impl Iterator<Item = i32> + '_ {
        self.values
            .iter()
            .zip(self.states.iter())
            .filter(move |(_, state)| predicate(**state))
            .map(|(&value, _)| value)
    }

    pub(crate) fn kernel_size(&self) -> usize {
        self.kernel_size
    }

    pub(crate) fn envelope_size(&self) -> usize {
        self.envelope_size
    }

    pub(crate) fn is_instantiated(&self) -> bool {
        self.kernel_size == self.envelope_size
    }

    pub(crate) fn max_kernel(&self) -> Option<i32> {
        self.states
            .iter()
            .rposition(|&state| state == ElementState::Required)
            .map(|index| self.values[index])
    }

    /// Adds `value` to the kernel. Returns the previous state of the value if the domain changed.
    pub(crate) fn add_to_kernel(
        &mut self,
        value: i32,
    ) -> Result<Option<ElementState>, Contradiction> {
        match self.state(value) {
            ElementState::Required => Ok(None),
            ElementState::Possible => Ok(Some(self.set_state(value, ElementState::Required))),
            ElementState::Excluded => Err(Contradiction::EmptyDomain),
        }
    }

    /// Removes `value` from the envelope. Returns the previous state of the value if the domain
    /// changed.
    pub(crate) fn remove_from_envelope(
        &mut self,
        value: i32,
    ) -> Result<Option<ElementState>, Contradiction> {
        match self.state(value) {
            ElementState::Excluded => Ok(None),
            ElementState::Possible => Ok(Some(self.set_state(value, ElementState::Excluded))),
            ElementState::Required => Err(Contradiction::EmptyDomain),
        }
    }

    /// Undoes a change to `value`, used when backtracking.
    pub(crate) fn restore(&mut self, value: i32, previous: ElementState) {
        let _ = self.set_state(value, previous);
        calabash_assert_moderate!(self.kernel_size <= self.envelope_size);
    }
}
