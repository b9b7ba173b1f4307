use std::collections::BTreeSet;

use lucid_identifiers::Identity;

/// Identities allowed to assert that a burn happened on the other ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayerSet {
    relayers: BTreeSet<Identity>,
}

impl RelayerSet {
    pub fn new(relayers: impl IntoIterator<Item = Identity>) -> Self {
        Self {
            relayers: relayers.into_iter().collect(),
        }
    }

    pub fn contains(&self, id: &Identity) -> bool {
        self.relayers.contains(id)
    }

    /// Returns `false` if `id` was already present.
    pub fn insert(&mut self, id: Identity) -> bool {
        self.relayers.insert(id)
    }

    /// Returns `false` if `id` was not present.
    pub fn remove(&mut self, id: &Identity) -> bool {
        self.relayers.remove(id)
    }

    pub fn len(&self) -> usize {
        self.relayers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relayers.is_empty()
    }

    /// Relayers in ascending order.
    pub fn to_vec(&self) -> Vec<Identity> {
        self.relayers.iter().copied().collect()
    }
}
