use crate::calabash_assert_simple;

/// An undo log divided into checkpoints.
///
/// Entries are pushed as changes happen. Going back to an earlier checkpoint removes every entry
/// recorded since, and yields them newest first so that the owner can revert them in order.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    /// For every open checkpoint, the number of entries recorded before it was opened.
    checkpoint_starts: Vec<usize>,
    entries: Vec<T>,
}

impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            checkpoint_starts: vec![],
            entries: vec![],
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn new_checkpoint(&mut self) {
        self.checkpoint_starts.push(self.entries.len());
    }

    /// The number of open checkpoints; 0 is the root.
    pub(crate) fn get_checkpoint(&self) -> usize {
        self.checkpoint_starts.len()
    }

    /// Closes every checkpoint after `checkpoint` and returns their entries, newest first.
    pub(crate) fn synchronise(&mut self, checkpoint: usize) -> impl Iterator<Item = T> + '_ {
        calabash_assert_simple!(checkpoint < self.get_checkpoint());

        let start = self.checkpoint_starts[checkpoint];
        self.checkpoint_starts.truncate(checkpoint);
        self.entries.drain(start..).rev()
    }

    pub(crate) fn push(&mut self, entry: T) {
        self.entries.push(entry);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}
