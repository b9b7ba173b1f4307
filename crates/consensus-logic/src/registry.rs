use std::collections::BTreeSet;

use lucid_chain_types::Quorum;
use lucid_identifiers::Identity;

use crate::errors::RegistryError;

/// The authorized signer set and the fraction of it a proof must represent.
///
/// Plain owned state: capability checks happen in the coordinator, which
/// holds this behind a lock and is the only thing that mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorRegistry {
    members: BTreeSet<Identity>,
    quorum: Quorum,
}

impl ValidatorRegistry {
    /// Bootstraps the registry. The member set must not be empty.
    pub fn new(
        members: impl IntoIterator<Item = Identity>,
        quorum: Quorum,
    ) -> Result<Self, RegistryError> {
        let members: BTreeSet<_> = members.into_iter().collect();
        if members.is_empty() {
            return Err(RegistryError::EmptyMemberSet);
        }
        Ok(Self { members, quorum })
    }

    pub fn is_member(&self, id: &Identity) -> bool {
        self.members.contains(id)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Members in ascending order.
    pub fn members(&self) -> Vec<Identity> {
        self.members.iter().copied().collect()
    }

    pub fn quorum(&self) -> Quorum {
        self.quorum
    }

    /// Signers a proof needs under the current quorum and member count.
    pub fn required_signers(&self) -> usize {
        self.quorum.required_signers(self.members.len())
    }

    pub(crate) fn add_member(&mut self, id: Identity) -> Result<(), RegistryError> {
        if !self.members.insert(id) {
            return Err(RegistryError::MemberAlreadyExists(id));
        }
        Ok(())
    }

    pub(crate) fn remove_member(&mut self, id: &Identity) -> Result<(), RegistryError> {
        if self.members.len() == 1 && self.members.contains(id) {
            return Err(RegistryError::LastMemberProtected(*id));
        }
        if !self.members.remove(id) {
            return Err(RegistryError::MemberNotFound(*id));
        }
        Ok(())
    }

    pub(crate) fn set_quorum(&mut self, quorum: Quorum) {
        self.quorum = quorum;
    }
}
