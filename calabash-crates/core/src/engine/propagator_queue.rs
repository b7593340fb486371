use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::collections::VecDeque;

use crate::calabash_assert_moderate;
use crate::containers::KeyedVec;
use crate::propagation::Priority;
use crate::propagation::PropagatorId;

/// The propagators waiting to be called, one FIFO queue per [`Priority`].
///
/// A propagator is in the queue at most once; enqueueing it again is a no-op.
#[derive(Debug, Clone)]
pub(crate) struct PropagatorQueue {
    queues: Vec<VecDeque<PropagatorId>>,
    is_enqueued: KeyedVec<PropagatorId, bool>,
    num_enqueued: usize,
    present_priorities: BinaryHeap<Reverse<u32>>,
}

impl Default for PropagatorQueue {
    fn default() -> Self {
        Self::new(4)
    }
}

impl PropagatorQueue {
    pub(crate) fn new(num_priority_levels: u32) -> PropagatorQueue {
        PropagatorQueue {
            queues: vec![VecDeque::new(); num_priority_levels as usize],
            is_enqueued: KeyedVec::default(),
            num_enqueued: 0,
            present_priorities: BinaryHeap::new(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.num_enqueued == 0
    }

    pub(crate) fn enqueue_propagator(&mut self, propagator_id: PropagatorId, priority: Priority) {
        calabash_assert_moderate!((priority as usize) < self.queues.len());

        if self.is_propagator_enqueued(propagator_id) {
            return;
        }

        self.is_enqueued.accomodate(propagator_id, false);
        self.is_enqueued[propagator_id] = true;
        self.num_enqueued += 1;

        let queue = &mut self.queues[priority as usize];
        if queue.is_empty() {
            self.present_priorities.push(Reverse(priority as u32));
        }
        queue.push_back(propagator_id);
    }

    /// Removes the propagator with the highest priority which was enqueued first.
    pub(crate) fn pop(&mut self) -> Option<PropagatorId> {
        let Reverse(top_priority) = *self.present_priorities.peek()?;
        let queue = &mut self.queues[top_priority as usize];
        calabash_assert_moderate!(!queue.is_empty());

        let propagator_id = queue.pop_front()?;
        if queue.is_empty() {
            let _ = self.present_priorities.pop();
        }

        self.is_enqueued[propagator_id] = false;
        self.num_enqueued -= 1;

        Some(propagator_id)
    }

    pub(crate) fn clear(&mut self) {
        while let Some(Reverse(priority)) = self.present_priorities.pop() {
            self.queues[priority as usize].clear();
        }

        self.is_enqueued
            .iter_mut()
            .for_each(|is_enqueued| *is_enqueued = false);
        self.num_enqueued = 0;
    }

    pub(crate) fn is_propagator_enqueued(&self, propagator_id: PropagatorId) -> bool {
        self.is_enqueued
            .get(propagator_id)
            .copied()
            .unwrap_or_default()
    }
}
