use std::sync::Arc;

use lucid_authority::AdminAuthority;
use lucid_chain_types::{BridgeStats, MintRecord};
use lucid_db_types::{traits::BridgeDatabase, types::MintCommit, DbResult};
use lucid_identifiers::{Amount, Identity, SourceTxId};
use lucid_status::{EventSink, LedgerEvent};
use parking_lot::RwLock;
use tracing::*;

use crate::{BridgeError, RelayerSet, TokenLedger};

/// Burns on this ledger toward the other one, and mints here for burns
/// relayers report from the other one.
///
/// Nothing here verifies the other ledger. Mint correctness rests on the
/// relayer allowlist plus the replay set, which the store updates together
/// with the supply counter in one atomic step.
#[derive(Debug)]
pub struct BridgeLedger {
    authority: Arc<AdminAuthority>,
    relayers: RwLock<RelayerSet>,
    db: Arc<dyn BridgeDatabase>,
    token: Arc<dyn TokenLedger>,
    events: Arc<dyn EventSink>,
    max_supply: Amount,
}

impl BridgeLedger {
    pub fn new(
        authority: Arc<AdminAuthority>,
        relayers: RelayerSet,
        db: Arc<dyn BridgeDatabase>,
        token: Arc<dyn TokenLedger>,
        events: Arc<dyn EventSink>,
        max_supply: Amount,
    ) -> Self {
        Self {
            authority,
            relayers: RwLock::new(relayers),
            db,
            token,
            events,
            max_supply,
        }
    }

    /// Destroys `amount` of the caller's tokens and records the intent to
    /// move them to `destination` on the other ledger.
    pub fn burn_to_other(
        &self,
        caller: &Identity,
        amount: Amount,
        destination: &str,
    ) -> Result<(), BridgeError> {
        let res = self.burn_inner(caller, amount, destination);
        if let Err(e) = &res {
            warn!(%caller, %amount, err = %e, "burn rejected");
        }
        res
    }

    fn burn_inner(
        &self,
        caller: &Identity,
        amount: Amount,
        destination: &str,
    ) -> Result<(), BridgeError> {
        if amount == 0 {
            return Err(BridgeError::InvalidAmount);
        }
        if destination.trim().is_empty() {
            return Err(BridgeError::InvalidDestination);
        }

        self.token.debit(caller, amount)?;

        let bridged = match self.db.record_burn(caller, amount) {
            Ok(bridged) => bridged,
            Err(e) => {
                // Undo the debit so a storage failure leaves no trace.
                self.token.credit(caller, amount);
                error!(%caller, %amount, err = %e, "failed to record burn, debit reverted");
                return Err(e.into());
            }
        };

        info!(%caller, %amount, %destination, %bridged, "bridged out");
        self.events.emit(LedgerEvent::BridgedOut {
            account: *caller,
            amount,
            destination: destination.to_owned(),
        });
        Ok(())
    }

    /// Mints `amount` to `account` for a burn observed on the other ledger.
    ///
    /// Each `source_tx` is consumed at most once, even across concurrent
    /// calls from different relayers.
    pub fn mint_from_other(
        &self,
        caller: &Identity,
        account: &Identity,
        amount: Amount,
        source_tx: &SourceTxId,
    ) -> Result<(), BridgeError> {
        let span = debug_span!("mint", %caller, %source_tx);
        let _g = span.enter();

        let res = self.mint_inner(caller, account, amount, source_tx);
        if let Err(e) = &res {
            warn!(%account, %amount, err = %e, class = %e.class(), "mint rejected");
        }
        res
    }

    fn mint_inner(
        &self,
        caller: &Identity,
        account: &Identity,
        amount: Amount,
        source_tx: &SourceTxId,
    ) -> Result<(), BridgeError> {
        // Held until the mint lands, so a deauthorization is ordered strictly
        // before or after it.
        let relayers = self.relayers.read();
        if !relayers.contains(caller) {
            return Err(BridgeError::UnauthorizedRelayer(*caller));
        }
        if amount == 0 {
            return Err(BridgeError::InvalidAmount);
        }
        source_tx.validate()?;

        let record = MintRecord::new(*account, amount);
        let total_minted = match self.db.record_mint(source_tx, record, self.max_supply)? {
            MintCommit::Committed { total_minted } => total_minted,
            MintCommit::AlreadyProcessed => {
                return Err(BridgeError::TransactionAlreadyProcessed(source_tx.clone()))
            }
            MintCommit::CapExceeded { total_minted } => {
                return Err(BridgeError::SupplyCapExceeded {
                    requested: amount,
                    total_minted,
                    max_supply: self.max_supply,
                })
            }
        };
        drop(relayers);

        self.token.credit(account, amount);

        info!(%account, %amount, %total_minted, "bridged in");
        self.events.emit(LedgerEvent::BridgedIn {
            account: *account,
            amount,
            source_tx_id: source_tx.clone(),
        });
        Ok(())
    }

    /// Adds `relayer` to the allowlist. Returns `false` if it was already
    /// there, in which case nothing is emitted.
    pub fn authorize_relayer(
        &self,
        actor: &Identity,
        relayer: Identity,
    ) -> Result<bool, BridgeError> {
        self.authority.ensure_admin(actor)?;
        if !self.relayers.write().insert(relayer) {
            return Ok(false);
        }
        info!(%relayer, "relayer authorized");
        self.events.emit(LedgerEvent::RelayerAuthorized { relayer });
        Ok(true)
    }

    /// Removes `relayer` from the allowlist. Returns `false` if it was not
    /// there, in which case nothing is emitted.
    pub fn deauthorize_relayer(
        &self,
        actor: &Identity,
        relayer: &Identity,
    ) -> Result<bool, BridgeError> {
        self.authority.ensure_admin(actor)?;
        if !self.relayers.write().remove(relayer) {
            return Ok(false);
        }
        info!(%relayer, "relayer deauthorized");
        self.events.emit(LedgerEvent::RelayerDeauthorized { relayer: *relayer });
        Ok(true)
    }

    pub fn is_authorized_relayer(&self, id: &Identity) -> bool {
        self.relayers.read().contains(id)
    }

    pub fn authorized_relayers(&self) -> Vec<Identity> {
        self.relayers.read().to_vec()
    }

    pub fn max_supply(&self) -> Amount {
        self.max_supply
    }

    /// `(total_minted, headroom)` where headroom is what can still be minted.
    pub fn get_bridge_stats(&self) -> DbResult<(Amount, Amount)> {
        let stats = self.bridge_stats()?;
        Ok((stats.total_minted, stats.headroom))
    }

    pub fn bridge_stats(&self) -> DbResult<BridgeStats> {
        Ok(BridgeStats::from_totals(
            self.db.get_totals()?,
            self.max_supply,
        ))
    }

    /// Audit counter of what `account` has burned toward the other ledger.
    pub fn bridged_balance_of(&self, account: &Identity) -> DbResult<Amount> {
        self.db.get_bridged_balance(account)
    }

    pub fn is_processed(&self, source_tx: &SourceTxId) -> DbResult<bool> {
        self.db.is_processed(source_tx)
    }

    pub fn mint_record(&self, source_tx: &SourceTxId) -> DbResult<Option<MintRecord>> {
        self.db.get_mint_record(source_tx)
    }

    pub fn processed_count(&self) -> DbResult<u64> {
        self.db.processed_count()
    }
}
