use enumset::EnumSet;

use super::DomainEvent;
use super::DomainEvents;
use crate::containers::KeyedVec;
use crate::engine::variables::AnyDomainId;
use crate::engine::variables::IntDomainId;
use crate::engine::variables::SetDomainId;
use crate::propagation::PropagatorVarId;

/// A propagator (through the local id of the variable within the propagator) together with the
/// events it wants to hear about.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Watcher {
    pub(crate) propagator_var: PropagatorVarId,
    pub(crate) events: EnumSet<DomainEvent>,
}

/// For every variable, the propagators which watch it.
#[derive(Default, Debug)]
pub(crate) struct WatchList {
    set_watchers: KeyedVec<SetDomainId, Vec<Watcher>>,
    int_watchers: KeyedVec<IntDomainId, Vec<Watcher>>,
}

impl WatchList {
    pub(crate) fn grow_set(&mut self) {
        let _ = self.set_watchers.push(Vec::default());
    }

    pub(crate) fn grow_int(&mut self) {
        let _ = self.int_watchers.push(Vec::default());
    }

    pub(crate) fn watch(
        &mut self,
        domain: AnyDomainId,
        domain_events: DomainEvents,
        propagator_var: PropagatorVarId,
    ) {
        let watchers = match domain {
            AnyDomainId::Set(domain) => &mut self.set_watchers[domain],
            AnyDomainId::Int(domain) => &mut self.int_watchers[domain],
        };

        if let Some(watcher) = watchers
            .iter_mut()
            .find(|watcher| watcher.propagator_var == propagator_var)
        {
            watcher.events |= domain_events.events();
        } else {
            watchers.push(Watcher {
                propagator_var,
                events: domain_events.events(),
            });
        }
    }

    pub(crate) fn get_watchers(&self, domain: AnyDomainId) -> &[Watcher] {
        match domain {
            AnyDomainId::Set(domain) => &self.set_watchers[domain],
            AnyDomainId::Int(domain) => &self.int_watchers[domain],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::propagation::LocalId;
    use crate::propagation::PropagatorId;

    #[test]
    fn registering_twice_merges_the_events() {
        let mut watch_list = WatchList::default();
        watch_list.grow_set();
        let domain = AnyDomainId::Set(SetDomainId::new(0));
        let propagator_var = PropagatorVarId {
            propagator: PropagatorId(0),
            variable: LocalId::from(0),
        };

        watch_list.watch(domain, DomainEvents::KERNEL, propagator_var);
        watch_list.watch(domain, DomainEvents::ENVELOPE, propagator_var);

        let watchers = watch_list.get_watchers(domain);
        assert_eq!(1, watchers.len());
        assert_eq!(DomainEvents::ANY_SET.events(), watchers[0].events);
    }
}
