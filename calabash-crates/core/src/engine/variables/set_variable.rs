use crate::containers::StorageKey;

/// Identifies a set variable, i.e. a variable whose domain is described by a kernel (the values
/// which are definitely in the set) and an envelope (the values which may be in the set).
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SetDomainId {
    pub id: u32,
}

impl SetDomainId {
    pub const fn new(id: u32) -> Self {
        SetDomainId { id }
    }
}

impl StorageKey for SetDomainId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        SetDomainId { id: index as u32 }
    }
}

impl std::fmt::Display for SetDomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s{}", self.id)
    }
}
