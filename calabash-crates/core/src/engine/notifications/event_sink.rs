use super::DomainEvent;
use crate::engine::variables::AnyDomainId;

/// While a propagator runs (or the host modifies domains directly), the changes it performs are
/// captured as events in the event sink. Afterwards, the event sink is drained to notify all the
/// propagators that subscribe to those events.
///
/// Every event carries the value it concerns: the element added to the kernel or removed from
/// the envelope, or the new bound of an integer variable.
#[derive(Default, Clone, Debug)]
pub(crate) struct EventSink {
    events: Vec<(DomainEvent, AnyDomainId, i32)>,
}

impl EventSink {
    pub(crate) fn event_occurred(&mut self, event: DomainEvent, domain: AnyDomainId, value: i32) {
        self.events.push((event, domain, value));
    }

    pub(crate) fn drain(&mut self) -> impl Iterator<Item = (DomainEvent, AnyDomainId, i32)> + '_ {
        self.events.drain(..)
    }

    pub(crate) fn clear(&mut self) {
        self.events.clear();
    }
}
