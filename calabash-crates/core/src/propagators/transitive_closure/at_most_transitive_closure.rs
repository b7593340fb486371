use std::fmt::Display;

use itertools::Itertools;

use super::maximal_closure::MaximalClosure;
use crate::basic_types::Contradiction;
use crate::basic_types::Entailment;
use crate::basic_types::PropagationStatus;
use crate::calabash_assert_eq_simple;
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

/// The arguments of the constraint which bounds every `closure[i]` by the nodes reachable from
/// node `i` in the graph with an edge `i → j` for every `j ∈ relation[i]`.
#[derive(Clone, Debug)]
pub struct AtMostTransitiveClosureArgs {
    pub relation: Box<[SetDomainId]>,
    pub closure: Box<[SetDomainId]>,
    /// Whether every node is considered to reach itself.
    pub reflexive: bool,
}

impl PropagatorConstructor for AtMostTransitiveClosureArgs {
    type PropagatorImpl = AtMostTransitiveClosurePropagator;

    fn create(self, mut context: PropagatorConstructorContext) -> Self::PropagatorImpl {
        let AtMostTransitiveClosureArgs {
            relation,
            closure,
            reflexive,
        } = self;

        calabash_assert_eq_simple!(
            relation.len(),
            closure.len(),
            "every node needs both a relation and a closure variable"
        );

        // The closure variables only lose values; nothing about them makes more values
        // unreachable.
        for (index, &var) in relation.iter().enumerate() {
            context.register(var, DomainEvents::ENVELOPE, LocalId::from(index as u32));
        }

        AtMostTransitiveClosurePropagator {
            relation,
            closure,
            reflexive,
        }
    }
}

/// Propagator which removes from `closure[i]` every node which is not reachable from `i` in the
/// graph described by the envelopes of the relation variables. Can be constructed through
/// [`AtMostTransitiveClosureArgs`].
///
/// Only an upper bound on the closure is enforced: it may contain fewer nodes than the transitive
/// closure of the relation. Without `reflexive`, a node only reaches itself through a cycle.
///
/// Values outside of `0..n` (with `n` the number of nodes) are not nodes, so they are removed from
/// the envelopes of the relation variables; a relation kernel containing such a value makes the
/// constraint unsatisfiable.
///
/// There is no incremental propagation: every call computes the strongly connected components of
/// the graph from scratch, which takes `O(n³)` time in the worst case.
#[derive(Clone, Debug)]
pub struct AtMostTransitiveClosurePropagator {
    relation: Box<[SetDomainId]>,
    closure: Box<[SetDomainId]>,
    reflexive: bool,
}

impl AtMostTransitiveClosurePropagator {
    fn is_node(&self, value: i32) -> bool {
        usize::try_from(value).is_ok_and(|node| node < self.relation.len())
    }

    /// The graph of the relation envelopes, restricted to the nodes.
    fn successors(&self, domains: &impl ReadDomains) -> Vec<Vec<usize>> {
        self.relation
            .iter()
            .map(|&var| {
                domains
                    .envelope(var)
                    .filter(|&value| self.is_node(value))
                    .map(|value| value as usize)
                    .collect()
            })
            .collect()
    }

    /// Whether `closure[node]` may contain `value`.
    fn may_contain(&self, maximal_closure: &MaximalClosure, node: usize, value: i32) -> bool {
        if self.reflexive && value == node as i32 {
            return true;
        }

        self.is_node(value) && maximal_closure.reaches(node, value as usize)
    }

    fn remove_values_outside_the_nodes(
        &self,
        context: &mut PropagationContext,
    ) -> PropagationStatus {
        for &var in self.relation.iter() {
            let outside = context
                .envelope(var)
                .filter(|&value| !self.is_node(value))
                .collect::<Vec<_>>();

            for value in outside {
                if context.kernel_contains(var, value) {
                    return Err(Contradiction::Propagator {
                        propagator: "AtMostTransitiveClosure",
                    });
                }

                context.remove_from_envelope(var, value)?;
            }
        }

        Ok(())
    }
}

impl Propagator for AtMostTransitiveClosurePropagator {
    fn name(&self) -> &str {
        "AtMostTransitiveClosure"
    }

    fn priority(&self) -> Priority {
        Priority::VeryLow
    }

    fn propagate_from_scratch(&mut self, mut context: PropagationContext) -> PropagationStatus {
        self.remove_values_outside_the_nodes(&mut context)?;

        let maximal_closure = MaximalClosure::new(&self.successors(&context));

        for (node, &var) in self.closure.iter().enumerate() {
            let unreachable = context
                .envelope(var)
                .filter(|&value| !self.may_contain(&maximal_closure, node, value))
                .collect::<Vec<_>>();

            for value in unreachable {
                context.remove_from_envelope(var, value)?;
            }
        }

        Ok(())
    }

    fn is_entailed(&self, domains: Domains) -> Entailment {
        let edge_outside_the_nodes = self
            .relation
            .iter()
            .any(|&var| domains.kernel(var).any(|value| !self.is_node(value)));
        if edge_outside_the_nodes {
            return Entailment::Violated;
        }

        let maximal_closure = MaximalClosure::new(&self.successors(&domains));
        let unreachable_in_kernel = self.closure.iter().enumerate().any(|(node, &var)| {
            domains
                .kernel(var)
                .any(|value| !self.may_contain(&maximal_closure, node, value))
        });
        if unreachable_in_kernel {
            return Entailment::Violated;
        }

        let is_instantiated = self
            .relation
            .iter()
            .chain(self.closure.iter())
            .all(|&var| domains.is_set_instantiated(var));
        if is_instantiated {
            Entailment::Satisfied
        } else {
            Entailment::Undetermined
        }
    }
}

impl Display for AtMostTransitiveClosurePropagator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "at_most_transitive_closure([{}], [{}], reflexive={})",
            self.relation.iter().join(", "),
            self.closure.iter().join(", "),
            self.reflexive
        )
    }
}
