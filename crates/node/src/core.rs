use std::sync::Arc;

use lucid_authority::{AdminAuthority, AuthorityError};
use lucid_bridge::{BridgeError, BridgeLedger, TokenLedger};
use lucid_chain_types::{BridgeStats, Header, MintRecord, Quorum};
use lucid_consensus_logic::{
    errors::{FinalizeError, RegistryError},
    ConsensusCoordinator,
};
use lucid_crypto::{ProofEvaluator, PublicKeySet, VerifierBackend};
use lucid_db_types::DbResult;
use lucid_identifiers::{Amount, Identity, SequenceId, SourceTxId};
use lucid_status::{BroadcastEventSink, EventSink, LedgerEvent};
use tokio::sync::broadcast;

/// Finality log and bridge ledger sharing one admin capability and one event
/// stream.
///
/// Every method is a single atomic transition on the underlying component.
#[derive(Debug)]
pub struct LucidCore {
    authority: Arc<AdminAuthority>,
    consensus: ConsensusCoordinator,
    bridge: BridgeLedger,
    token: Arc<dyn TokenLedger>,
    events: Arc<dyn EventSink>,
    broadcast: Arc<BroadcastEventSink>,
}

impl LucidCore {
    pub(crate) fn new(
        authority: Arc<AdminAuthority>,
        consensus: ConsensusCoordinator,
        bridge: BridgeLedger,
        token: Arc<dyn TokenLedger>,
        events: Arc<dyn EventSink>,
        broadcast: Arc<BroadcastEventSink>,
    ) -> Self {
        Self {
            authority,
            consensus,
            bridge,
            token,
            events,
            broadcast,
        }
    }

    pub fn consensus(&self) -> &ConsensusCoordinator {
        &self.consensus
    }

    pub fn bridge(&self) -> &BridgeLedger {
        &self.bridge
    }

    pub fn token_ledger(&self) -> &Arc<dyn TokenLedger> {
        &self.token
    }

    /// New receiver for every event emitted from here on.
    pub fn subscribe(&self) -> broadcast::Receiver<LedgerEvent> {
        self.broadcast.subscribe()
    }

    // Admin surface.

    pub fn admin(&self) -> Identity {
        self.authority.admin()
    }

    /// Hands the admin capability to `new_admin`, effective immediately for
    /// both the consensus and bridge surfaces.
    pub fn transfer_admin(
        &self,
        actor: &Identity,
        new_admin: Identity,
    ) -> Result<(), AuthorityError> {
        let previous = self.authority.transfer(actor, new_admin)?;
        self.events.emit(LedgerEvent::AdminTransferred {
            previous,
            new: new_admin,
        });
        Ok(())
    }

    pub fn add_member(&self, actor: &Identity, member: Identity) -> Result<(), RegistryError> {
        self.consensus.add_member(actor, member)
    }

    pub fn remove_member(&self, actor: &Identity, member: &Identity) -> Result<(), RegistryError> {
        self.consensus.remove_member(actor, member)
    }

    pub fn set_quorum(
        &self,
        actor: &Identity,
        numerator: u32,
        denominator: u32,
    ) -> Result<(), RegistryError> {
        self.consensus.set_quorum(actor, numerator, denominator)
    }

    pub fn set_override(&self, actor: &Identity, enabled: bool) -> Result<(), AuthorityError> {
        self.consensus.set_override(actor, enabled)
    }

    pub fn set_verifier_backend(
        &self,
        actor: &Identity,
        evaluator: Arc<dyn ProofEvaluator>,
    ) -> Result<(), AuthorityError> {
        self.consensus.set_verifier_backend(actor, evaluator)
    }

    pub fn authorize_relayer(
        &self,
        actor: &Identity,
        relayer: Identity,
    ) -> Result<bool, BridgeError> {
        self.bridge.authorize_relayer(actor, relayer)
    }

    pub fn deauthorize_relayer(
        &self,
        actor: &Identity,
        relayer: &Identity,
    ) -> Result<bool, BridgeError> {
        self.bridge.deauthorize_relayer(actor, relayer)
    }

    // Finalization surface.

    pub fn finalize(
        &self,
        caller: &Identity,
        header: Header,
        keys: &PublicKeySet,
    ) -> Result<(), FinalizeError> {
        self.consensus.finalize(caller, header, keys)
    }

    // Bridge surface.

    pub fn burn_to_other(
        &self,
        caller: &Identity,
        amount: Amount,
        destination: &str,
    ) -> Result<(), BridgeError> {
        self.bridge.burn_to_other(caller, amount, destination)
    }

    pub fn mint_from_other(
        &self,
        caller: &Identity,
        account: &Identity,
        amount: Amount,
        source_tx: &SourceTxId,
    ) -> Result<(), BridgeError> {
        self.bridge.mint_from_other(caller, account, amount, source_tx)
    }

    // Query surface.

    pub fn get_header(&self, sequence_id: SequenceId) -> DbResult<Option<Header>> {
        self.consensus.get_header(sequence_id)
    }

    pub fn latest_sequence(&self) -> DbResult<Option<SequenceId>> {
        self.consensus.latest_sequence()
    }

    pub fn latest_header(&self) -> DbResult<Option<Header>> {
        self.consensus.latest_header()
    }

    pub fn header_count(&self) -> DbResult<u64> {
        self.consensus.header_count()
    }

    pub fn is_member(&self, id: &Identity) -> bool {
        self.consensus.is_member(id)
    }

    pub fn member_count(&self) -> usize {
        self.consensus.member_count()
    }

    pub fn members(&self) -> Vec<Identity> {
        self.consensus.members()
    }

    pub fn quorum(&self) -> Quorum {
        self.consensus.quorum()
    }

    pub fn required_signers(&self) -> usize {
        self.consensus.required_signers()
    }

    pub fn verifier_backend(&self) -> VerifierBackend {
        self.consensus.verifier_backend()
    }

    pub fn override_enabled(&self) -> bool {
        self.consensus.override_enabled()
    }

    pub fn is_authorized_relayer(&self, id: &Identity) -> bool {
        self.bridge.is_authorized_relayer(id)
    }

    pub fn authorized_relayers(&self) -> Vec<Identity> {
        self.bridge.authorized_relayers()
    }

    /// `(total_minted, headroom)`.
    pub fn get_bridge_stats(&self) -> DbResult<(Amount, Amount)> {
        self.bridge.get_bridge_stats()
    }

    pub fn bridge_stats(&self) -> DbResult<BridgeStats> {
        self.bridge.bridge_stats()
    }

    pub fn bridged_balance_of(&self, account: &Identity) -> DbResult<Amount> {
        self.bridge.bridged_balance_of(account)
    }

    pub fn balance_of(&self, account: &Identity) -> Amount {
        self.token.balance_of(account)
    }

    pub fn is_processed(&self, source_tx: &SourceTxId) -> DbResult<bool> {
        self.bridge.is_processed(source_tx)
    }

    pub fn mint_record(&self, source_tx: &SourceTxId) -> DbResult<Option<MintRecord>> {
        self.bridge.mint_record(source_tx)
    }
}
