use super::set_domain::ElementState;
use super::IntDomain;
use super::SetDomain;
use crate::basic_types::Contradiction;
use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::engine::notifications::DomainEvent;
use crate::engine::notifications::EventSink;
use crate::engine::variables::IntDomainId;
use crate::engine::variables::SetDomainId;

/// An undo entry for a single domain change.
#[derive(Clone, Copy, Debug)]
enum TrailEntry {
    SetElement {
        domain: SetDomainId,
        value: i32,
        previous: ElementState,
    },
    IntBounds {
        domain: IntDomainId,
        lower_bound: i32,
        upper_bound: i32,
    },
}

/// The domains of all variables, together with the trail needed to restore them and the events
/// produced by changing them.
#[derive(Clone, Debug, Default)]
pub(crate) struct Assignments {
    set_domains: KeyedVec<SetDomainId, SetDomain>,
    int_domains: KeyedVec<IntDomainId, IntDomain>,
    trail: Trail<TrailEntry>,
    events: EventSink,
}

impl Assignments {
    pub(crate) fn grow_set(&mut self, kernel: &[i32], envelope: &[i32]) -> SetDomainId {
        self.set_domains.push(SetDomain::new(kernel, envelope))
    }

    pub(crate) fn grow_int(&mut self, lower_bound: i32, upper_bound: i32) -> IntDomainId {
        self.int_domains
            .push(IntDomain::new(lower_bound, upper_bound))
    }

    pub(crate) fn num_set_domains(&self) -> usize {
        self.set_domains.len()
    }

    pub(crate) fn num_int_domains(&self) -> usize {
        self.int_domains.len()
    }

    pub(crate) fn set_domain(&self, domain: SetDomainId) -> &SetDomain {
        &self.set_domains[domain]
    }

    pub(crate) fn int_domain(&self, domain: IntDomainId) -> &IntDomain {
        &self.int_domains[domain]
    }

    pub(crate) fn set_domain_ids(&self) -> impl Iterator<Item = SetDomainId> {
        self.set_domains.keys()
    }

    pub(crate) fn int_domain_ids(&self) -> impl Iterator<Item = IntDomainId> {
        self.int_domains.keys()
    }

    pub(crate) fn add_to_kernel(
        &mut self,
        domain: SetDomainId,
        value: i32,
    ) -> Result<(), Contradiction> {
        if let Some(previous) = self.set_domains[domain].add_to_kernel(value)? {
            self.trail.push(TrailEntry::SetElement {
                domain,
                value,
                previous,
            });
            self.events
                .event_occurred(DomainEvent::KernelGrew, domain.into(), value);
        }

        Ok(())
    }

    pub(crate) fn remove_from_envelope(
        &mut self,
        domain: SetDomainId,
        value: i32,
    ) -> Result<(), Contradiction> {
        if let Some(previous) = self.set_domains[domain].remove_from_envelope(value)? {
            self.trail.push(TrailEntry::SetElement {
                domain,
                value,
                previous,
            });
            self.events
                .event_occurred(DomainEvent::EnvelopeShrank, domain.into(), value);
        }

        Ok(())
    }

    pub(crate) fn set_lower_bound(
        &mut self,
        domain: IntDomainId,
        value: i32,
    ) -> Result<(), Contradiction> {
        let before = self.int_domains[domain];
        if self.int_domains[domain].set_lower_bound(value)? {
            self.trail_int_change(domain, before);
            self.events
                .event_occurred(DomainEvent::LowerRaised, domain.into(), value);
            self.notify_if_instantiated(domain);
        }

        Ok(())
    }

    pub(crate) fn set_upper_bound(
        &mut self,
        domain: IntDomainId,
        value: i32,
    ) -> Result<(), Contradiction> {
        let before = self.int_domains[domain];
        if self.int_domains[domain].set_upper_bound(value)? {
            self.trail_int_change(domain, before);
            self.events
                .event_occurred(DomainEvent::UpperLowered, domain.into(), value);
            self.notify_if_instantiated(domain);
        }

        Ok(())
    }

    fn trail_int_change(&mut self, domain: IntDomainId, before: IntDomain) {
        self.trail.push(TrailEntry::IntBounds {
            domain,
            lower_bound: before.lower_bound(),
            upper_bound: before.upper_bound(),
        });
    }

    fn notify_if_instantiated(&mut self, domain: IntDomainId) {
        let int_domain = self.int_domains[domain];
        if int_domain.is_fixed() {
            self.events.event_occurred(
                DomainEvent::Instantiated,
                domain.into(),
                int_domain.lower_bound(),
            );
        }
    }

    pub(crate) fn events(&mut self) -> &mut EventSink {
        &mut self.events
    }

    pub(crate) fn new_checkpoint(&mut self) {
        self.trail.new_checkpoint();
    }

    pub(crate) fn get_checkpoint(&self) -> usize {
        self.trail.get_checkpoint()
    }

    /// Restores every domain to the state it had when `checkpoint` was created. Restoring does
    /// not produce events; pending events are discarded.
    pub(crate) fn synchronise(&mut self, checkpoint: usize) {
        for entry in self.trail.synchronise(checkpoint) {
            match entry {
                TrailEntry::SetElement {
                    domain,
                    value,
                    previous,
                } => self.set_domains[domain].restore(value, previous),
                TrailEntry::IntBounds {
                    domain,
                    lower_bound,
                    upper_bound,
                } => self.int_domains[domain] = IntDomain::new(lower_bound, upper_bound),
            }
        }

        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::variables::AnyDomainId;

    #[test]
    fn changes_produce_events_once() {
        let mut assignments = Assignments::default();
        let set = assignments.grow_set(&[], &[0, 1, 2]);

        assignments.add_to_kernel(set, 1).expect("in the envelope");
        assignments.add_to_kernel(set, 1).expect("already in the kernel");
        assignments
            .remove_from_envelope(set, 2)
            .expect("not in the kernel");

        let events = assignments.events().drain().collect::<Vec<_>>();
        assert_eq!(
            vec![
                (DomainEvent::KernelGrew, AnyDomainId::Set(set), 1),
                (DomainEvent::EnvelopeShrank, AnyDomainId::Set(set), 2),
            ],
            events
        );
    }

    #[test]
    fn fixing_an_integer_produces_an_instantiated_event() {
        let mut assignments = Assignments::default();
        let int = assignments.grow_int(0, 5);

        assignments.set_lower_bound(int, 5).expect("within bounds");

        let events = assignments.events().drain().collect::<Vec<_>>();
        assert_eq!(
            vec![
                (DomainEvent::LowerRaised, AnyDomainId::Int(int), 5),
                (DomainEvent::Instantiated, AnyDomainId::Int(int), 5),
            ],
            events
        );
    }

    #[test]
    fn synchronising_restores_the_domains_of_the_checkpoint() {
        let mut assignments = Assignments::default();
        let set = assignments.grow_set(&[], &[0, 1, 2]);
        let int = assignments.grow_int(0, 5);

        assignments.add_to_kernel(set, 0).expect("in the envelope");
        assignments.new_checkpoint();
        assignments.add_to_kernel(set, 1).expect("in the envelope");
        assignments
            .remove_from_envelope(set, 2)
            .expect("not in the kernel");
        assignments.set_upper_bound(int, 2).expect("within bounds");
        assignments.set_lower_bound(int, 1).expect("within bounds");

        assignments.synchronise(0);

        let domain = assignments.set_domain(set);
        assert_eq!(vec![0], domain.kernel().collect::<Vec<_>>());
        assert_eq!(vec![0, 1, 2], domain.envelope().collect::<Vec<_>>());
        assert_eq!(0, assignments.int_domain(int).lower_bound());
        assert_eq!(5, assignments.int_domain(int).upper_bound());
        assert!(assignments.events().drain().next().is_none());
    }

    #[test]
    fn a_contradiction_leaves_the_domain_untouched() {
        let mut assignments = Assignments::default();
        let set = assignments.grow_set(&[1], &[1, 2]);

        assert_eq!(
            Err(Contradiction::EmptyDomain),
            assignments.remove_from_envelope(set, 1)
        );
        assert!(assignments.set_domain(set).envelope_contains(1));
        assert!(assignments.events().drain().next().is_none());
    }
}
