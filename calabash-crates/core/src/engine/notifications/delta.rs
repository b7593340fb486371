use enumset::EnumSet;

use super::DomainEvent;
#[cfg(doc)]
use crate::propagation::Propagator;

/// The changes to a single watched variable since the last time a propagator was handed its
/// delta.
///
/// A delta is owned: the solver moves it into [`Propagator::propagate_incremental`] and starts a
/// fresh one, so every change is consumed exactly once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Delta {
    entries: Vec<(DomainEvent, i32)>,
}

impl Delta {
    pub(crate) fn push(&mut self, event: DomainEvent, value: i32) {
        self.entries.push((event, value));
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The kinds of events present in this delta.
    pub fn events(&self) -> EnumSet<DomainEvent> {
        self.entries.iter().map(|&(event, _)| event).collect()
    }

    /// The values associated with the given kind of event, in the order they happened.
    ///
    /// For set variables these are the elements which entered the kernel or left the envelope, for
    /// integer variables the new bounds.
    pub fn values(&self, event: DomainEvent) -> impl Iterator<Item = i32> + '_ {
        self.entries
            .iter()
            .filter(move |&&(kind, _)| kind == event)
            .map(|&(_, value)| value)
    }
}

impl IntoIterator for Delta {
    type Item = (DomainEvent, i32);
    type IntoIter = std::vec::IntoIter<(DomainEvent, i32)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(DomainEvent, i32)> for Delta {
    fn from_iter<T: IntoIterator<Item = (DomainEvent, i32)>>(iter: T) -> Self {
        Delta {
            entries: iter.into_iter().collect(),
        }
    }
}
