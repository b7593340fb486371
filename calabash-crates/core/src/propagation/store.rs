use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::Index;
use std::ops::IndexMut;

use super::Propagator;
use super::PropagatorId;
use crate::calabash_assert_eq_simple;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;

/// Owns the propagators of a solver behind trait objects, indexed by [`PropagatorId`].
#[derive(Default)]
pub(crate) struct PropagatorStore {
    propagators: KeyedVec<PropagatorId, Box<dyn Propagator>>,
}

/// Identifies a propagator of a known type; the solver hands it out when the propagator is added
/// so that the concrete propagator can be retrieved later.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct PropagatorHandle<P> {
    id: PropagatorId,
    propagator: PhantomData<P>,
}

impl<P> PropagatorHandle<P> {
    pub fn propagator_id(self) -> PropagatorId {
        self.id
    }
}

impl<P> Clone for PropagatorHandle<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for PropagatorHandle<P> {}

impl PropagatorStore {
    pub(crate) fn num_propagators(&self) -> usize {
        self.propagators.len()
    }

    pub(crate) fn propagator_ids(&self) -> impl Iterator<Item = PropagatorId> {
        self.propagators.keys()
    }

    /// The id the next added propagator receives; constructors register their variables under it
    /// before the propagator exists.
    pub(crate) fn next_id(&self) -> PropagatorId {
        PropagatorId::create_from_index(self.propagators.len())
    }

    pub(crate) fn add<P: Propagator>(
        &mut self,
        expected_id: PropagatorId,
        propagator: P,
    ) -> PropagatorHandle<P> {
        let id = self.propagators.push(Box::new(propagator));
        calabash_assert_eq_simple!(expected_id, id);

        PropagatorHandle {
            id,
            propagator: PhantomData,
        }
    }

    /// The propagator behind `handle`, as its concrete type.
    pub(crate) fn get_propagator<P: Propagator>(&self, handle: PropagatorHandle<P>) -> Option<&P> {
        self[handle.id].downcast_ref()
    }
}

impl Index<PropagatorId> for PropagatorStore {
    type Output = dyn Propagator;

    fn index(&self, index: PropagatorId) -> &Self::Output {
        self.propagators[index].as_ref()
    }
}

impl IndexMut<PropagatorId> for PropagatorStore {
    fn index_mut(&mut self, index: PropagatorId) -> &mut Self::Output {
        self.propagators[index].as_mut()
    }
}

impl Debug for PropagatorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.propagators
                    .keys()
                    .map(|id| (id, self.propagators[id].name())),
            )
            .finish()
    }
}
