use crate::containers::StorageKey;

/// The identifier of an integer domain in the [`VariableStore`](crate::engine::VariableStore).
#[derive(Clone, PartialEq, Eq, Copy, Hash, PartialOrd, Ord)]
pub(crate) struct DomainId {
    pub(crate) id: u32,
}

impl StorageKey for DomainId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        DomainId { id: index as u32 }
    }
}

impl std::fmt::Display for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

impl std::fmt::Debug for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}
