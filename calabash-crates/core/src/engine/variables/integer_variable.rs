use crate::containers::StorageKey;

/// Identifies an integer variable whose domain is an interval `[lower_bound, upper_bound]`.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct IntDomainId {
    pub id: u32,
}

impl IntDomainId {
    pub const fn new(id: u32) -> Self {
        IntDomainId { id }
    }
}

impl StorageKey for IntDomainId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        IntDomainId { id: index as u32 }
    }
}

impl std::fmt::Display for IntDomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}
