use std::fmt::Display;

use crate::basic_types::Entailment;
use crate::basic_types::PropagationStatus;
use crate::engine::notifications::Delta;
use crate::engine::variables::SetDomainId;
use crate::propagation::DomainEvents;
use crate::propagation::Domains;
use crate::propagation::LocalId;
use crate::propagation::Priority;
use crate::propagation::PropagationContext;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::propagation::ReadDomains;

const MINUEND: LocalId = LocalId::from(0);
const SUBTRAHEND: LocalId = LocalId::from(1);
const DIFFERENCE: LocalId = LocalId::from(2);

/// The arguments of the constraint `minuend \ subtrahend = difference`.
#[derive(Clone, Debug)]
pub struct SetDifferenceArgs {
    pub minuend: SetDomainId,
    pub subtrahend: SetDomainId,
    pub difference: SetDomainId,
}

impl PropagatorConstructor for SetDifferenceArgs {
    type PropagatorImpl = SetDifferencePropagator;

    fn create(self, mut context: PropagatorConstructorContext) -> Self::PropagatorImpl {
        let SetDifferenceArgs {
            minuend,
            subtrahend,
            difference,
        } = self;

        context.register(minuend, DomainEvents::ANY_SET, MINUEND);
        context.register(subtrahend, DomainEvents::ANY_SET, SUBTRAHEND);
        context.register(difference, DomainEvents::ANY_SET, DIFFERENCE);

        SetDifferencePropagator {
            minuend,
            subtrahend,
            difference,
            candidates: vec![],
        }
    }
}

/// Propagator for `minuend \ subtrahend = difference`. Can be constructed through
/// [`SetDifferenceArgs`].
///
/// The constraint decomposes per element `i` into the relation over
/// `(i ∈ minuend, i ∈ subtrahend, i ∈ difference)` with the allowed tuples `000`, `010`, `101`
/// and `110`. The propagator removes every unsupported truth value of every element, which makes
/// it domain consistent on the kernel/envelope representation:
/// 1. `i ∈ difference.kernel` ⇒ `i ∈ minuend.kernel` and `i ∉ subtrahend.envelope`;
/// 2. `i ∈ subtrahend.kernel` or `i ∉ minuend.envelope` ⇒ `i ∉ difference.envelope`;
/// 3. `i ∈ minuend.kernel` and `i ∉ subtrahend.envelope` ⇒ `i ∈ difference.kernel`;
/// 4. `i ∉ difference.envelope` and `i ∉ subtrahend.envelope` ⇒ `i ∉ minuend.envelope`;
/// 5. `i ∉ difference.envelope` and `i ∈ minuend.kernel` ⇒ `i ∈ subtrahend.kernel`.
///
/// Applied in this order, a single pass brings an element to its fixpoint. Every change to any of
/// the three variables only affects the element it concerns, so incremental propagation filters
/// exactly the elements found in the delta.
#[derive(Clone, Debug)]
pub struct SetDifferencePropagator {
    minuend: SetDomainId,
    subtrahend: SetDomainId,
    difference: SetDomainId,
    /// The elements visited by a propagation from scratch; kept to reuse the allocation.
    candidates: Vec<i32>,
}

impl SetDifferencePropagator {
    fn filter_element(&self, context: &mut PropagationContext, value: i32) -> PropagationStatus {
        if context.kernel_contains(self.difference, value) {
            context.add_to_kernel(self.minuend, value)?;
            context.remove_from_envelope(self.subtrahend, value)?;
            return Ok(());
        }

        if context.kernel_contains(self.subtrahend, value)
            || !context.envelope_contains(self.minuend, value)
        {
            context.remove_from_envelope(self.difference, value)?;
        }

        if context.kernel_contains(self.minuend, value)
            && !context.envelope_contains(self.subtrahend, value)
        {
            context.add_to_kernel(self.difference, value)?;
        }

        if !context.envelope_contains(self.difference, value) {
            if !context.envelope_contains(self.subtrahend, value) {
                context.remove_from_envelope(self.minuend, value)?;
            }

            if context.kernel_contains(self.minuend, value) {
                context.add_to_kernel(self.subtrahend, value)?;
            }
        }

        Ok(())
    }
}

impl Propagator for SetDifferencePropagator {
    fn name(&self) -> &str {
        "SetDifference"
    }

    fn priority(&self) -> Priority {
        Priority::Medium
    }

    fn propagate_from_scratch(&mut self, mut context: PropagationContext) -> PropagationStatus {
        // Elements outside of both the minuend and the difference leave the subtrahend free.
        self.candidates.clear();
        self.candidates.extend(context.envelope(self.minuend));
        self.candidates.extend(context.envelope(self.difference));
        self.candidates.sort_unstable();
        self.candidates.dedup();

        for &value in &self.candidates {
            self.filter_element(&mut context, value)?;
        }

        Ok(())
    }

    fn propagate_incremental(
        &mut self,
        mut context: PropagationContext,
        _local_id: LocalId,
        delta: Delta,
    ) -> PropagationStatus {
        for (_, value) in delta {
            self.filter_element(&mut context, value)?;
        }

        Ok(())
    }

    fn is_entailed(&self, domains: Domains) -> Entailment {
        let unsupported_minuend = domains.kernel(self.minuend).any(|value| {
            !domains.envelope_contains(self.subtrahend, value)
                && !domains.envelope_contains(self.difference, value)
        });
        let unsupported_difference = domains.kernel(self.difference).any(|value| {
            !domains.envelope_contains(self.minuend, value)
                || domains.kernel_contains(self.subtrahend, value)
        });

        if unsupported_minuend || unsupported_difference {
            Entailment::Violated
        } else if domains.is_set_instantiated(self.minuend)
            && domains.is_set_instantiated(self.subtrahend)
            && domains.is_set_instantiated(self.difference)
        {
            Entailment::Satisfied
        } else {
            Entailment::Undetermined
        }
    }
}

impl Display for SetDifferencePropagator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} \\ {} = {}",
            self.minuend, self.subtrahend, self.difference
        )
    }
}
