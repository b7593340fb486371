use std::fmt::Display;

use crate::basic_types::Contradiction;
use crate::basic_types::Entailment;
use crate::basic_types::PropagationStatus;
use crate::engine::notifications::Delta;
use crate::engine::notifications::DomainEvent;
use crate::engine::variables::IntDomainId;
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

const SET: LocalId = LocalId::from(0);
const BOUND: LocalId = LocalId::from(1);

/// The arguments of the constraint `∀ i ∈ set: i < bound`.
#[derive(Clone, Debug)]
pub struct SetStrictHighBoundArgs {
    pub set: SetDomainId,
    pub bound: IntDomainId,
}

impl PropagatorConstructor for SetStrictHighBoundArgs {
    type PropagatorImpl = SetStrictHighBoundPropagator;

    fn create(self, mut context: PropagatorConstructorContext) -> Self::PropagatorImpl {
        context.register(self.set, DomainEvents::KERNEL, SET);
        context.register(self.bound, DomainEvents::UPPER_BOUND_AND_ASSIGN, BOUND);

        SetStrictHighBoundPropagator {
            set: self.set,
            bound: self.bound,
        }
    }
}

/// Propagator for `∀ i ∈ set: i < bound`, i.e. `max(set) < bound` where the empty set satisfies
/// any bound. Can be constructed through [`SetStrictHighBoundArgs`].
///
/// The kernel pushes the lower bound of `bound` up, and the upper bound of `bound` cuts the
/// envelope. Once every value of the envelope lies below the lower bound the constraint cannot
/// be violated anymore and the propagator becomes passive.
#[derive(Clone, Debug)]
pub struct SetStrictHighBoundPropagator {
    set: SetDomainId,
    bound: IntDomainId,
}

impl SetStrictHighBoundPropagator {
    fn raise_bound_above(&self, context: &mut PropagationContext, value: i32) -> PropagationStatus {
        // No integer is larger than `i32::MAX`.
        let lower_bound = value.checked_add(1).ok_or(Contradiction::EmptyDomain)?;
        context.set_lower_bound(self.bound, lower_bound)
    }

    fn prune_envelope(&self, context: &mut PropagationContext) -> PropagationStatus {
        let upper_bound = context.upper_bound(self.bound);
        let too_large = context
            .envelope(self.set)
            .skip_while(|&value| value < upper_bound)
            .collect::<Vec<_>>();

        for value in too_large {
            context.remove_from_envelope(self.set, value)?;
        }

        Ok(())
    }

    fn set_passive_if_entailed(&self, context: &mut PropagationContext) {
        if self.is_entailed(context.domains()) == Entailment::Satisfied {
            context.set_passive();
        }
    }
}

impl Propagator for SetStrictHighBoundPropagator {
    fn name(&self) -> &str {
        "SetStrictHighBound"
    }

    fn priority(&self) -> Priority {
        Priority::High
    }

    fn propagate_from_scratch(&mut self, mut context: PropagationContext) -> PropagationStatus {
        if let Some(max_kernel) = context.max_kernel(self.set) {
            self.raise_bound_above(&mut context, max_kernel)?;
        }

        self.prune_envelope(&mut context)?;
        self.set_passive_if_entailed(&mut context);

        Ok(())
    }

    fn propagate_incremental(
        &mut self,
        mut context: PropagationContext,
        local_id: LocalId,
        delta: Delta,
    ) -> PropagationStatus {
        match local_id {
            SET => {
                if let Some(largest) = delta.values(DomainEvent::KernelGrew).max() {
                    self.raise_bound_above(&mut context, largest)?;
                }
            }
            BOUND => self.prune_envelope(&mut context)?,
            _ => unreachable!("only the set and the bound are registered"),
        }

        self.set_passive_if_entailed(&mut context);

        Ok(())
    }

    fn is_entailed(&self, domains: Domains) -> Entailment {
        let lower_bound = domains.lower_bound(self.bound);
        let upper_bound = domains.upper_bound(self.bound);

        if domains
            .max_kernel(self.set)
            .is_some_and(|max_kernel| max_kernel >= upper_bound)
        {
            Entailment::Violated
        } else if domains.envelope(self.set).all(|value| value < lower_bound) {
            Entailment::Satisfied
        } else {
            Entailment::Undetermined
        }
    }
}

impl Display for SetStrictHighBoundPropagator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <<< {}", self.set, self.bound)
    }
}
