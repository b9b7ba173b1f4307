use lucid_identifiers::Identity;
use parking_lot::RwLock;
use tracing::*;

use crate::AuthorityError;

/// Holder of the single admin identity.
///
/// Cloned into every component with an admin surface via `Arc`, so a transfer
/// takes effect everywhere at once.
#[derive(Debug)]
pub struct AdminAuthority {
    admin: RwLock<Identity>,
}

impl AdminAuthority {
    pub fn new(admin: Identity) -> Self {
        Self {
            admin: RwLock::new(admin),
        }
    }

    /// Current admin identity.
    pub fn admin(&self) -> Identity {
        *self.admin.read()
    }

    pub fn is_admin(&self, actor: &Identity) -> bool {
        *self.admin.read() == *actor
    }

    /// Fails with [`AuthorityError::Unauthorized`] unless `actor` is the admin.
    pub fn ensure_admin(&self, actor: &Identity) -> Result<(), AuthorityError> {
        if self.is_admin(actor) {
            Ok(())
        } else {
            Err(AuthorityError::Unauthorized { actor: *actor })
        }
    }

    /// Hands the capability to `new_admin`, returning the previous holder.
    ///
    /// The check and the swap happen under one write lock, so two racing
    /// transfers from the same admin cannot both succeed.
    pub fn transfer(
        &self,
        actor: &Identity,
        new_admin: Identity,
    ) -> Result<Identity, AuthorityError> {
        let mut admin = self.admin.write();
        if *admin != *actor {
            return Err(AuthorityError::Unauthorized { actor: *actor });
        }
        let previous = std::mem::replace(&mut *admin, new_admin);
        info!(%previous, new = %new_admin, "admin transferred");
        Ok(previous)
    }
}
