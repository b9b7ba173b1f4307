//! Trait definitions for low level database interfaces.
//!
//! Nothing here validates headers or mints. The coordinator and bridge ledger
//! do that before calling in; the stores only guarantee uniqueness, replay
//! protection and the supply cap, each as one atomic step.

use std::{fmt, sync::Arc};

use lucid_chain_types::{BridgeTotals, Header, MintRecord};
use lucid_identifiers::{Amount, Identity, SequenceId, SourceTxId};

use crate::{types::MintCommit, DbResult};

/// Common database backend interface, so the node can be built over either
/// the persistent store or the in-memory stubs.
pub trait DatabaseBackend: Send + Sync {
    fn header_db(&self) -> Arc<impl HeaderDatabase>;
    fn bridge_db(&self) -> Arc<impl BridgeDatabase>;
}

/// Append-only store of committed headers keyed by sequence id.
pub trait HeaderDatabase: Send + Sync + fmt::Debug + 'static {
    /// Stores the header if no header with its sequence id exists.
    ///
    /// Returns `false`, writing nothing, when the slot is already taken. Two
    /// concurrent calls for the same sequence id see exactly one `true`.
    fn try_put_header(&self, header: &Header) -> DbResult<bool>;

    fn get_header(&self, sequence_id: SequenceId) -> DbResult<Option<Header>>;

    /// Highest committed sequence id, regardless of commit order.
    fn get_latest_sequence(&self) -> DbResult<Option<SequenceId>>;

    /// Committed headers with `start <= sequence_id < end`, ascending. Gaps are
    /// skipped.
    fn get_headers_range(&self, start: SequenceId, end: SequenceId) -> DbResult<Vec<Header>>;

    fn get_header_count(&self) -> DbResult<u64>;
}

/// Replay set, advisory balances and supply counters for the bridge.
pub trait BridgeDatabase: Send + Sync + fmt::Debug + 'static {
    /// Atomically checks replay and cap, then marks `source_tx` consumed,
    /// bumps the minted total and stores `record`.
    fn record_mint(
        &self,
        source_tx: &SourceTxId,
        record: MintRecord,
        max_supply: Amount,
    ) -> DbResult<MintCommit>;

    /// Adds `amount` to the account's bridged-out counter and the outbound
    /// total. Returns the account's new counter value.
    fn record_burn(&self, account: &Identity, amount: Amount) -> DbResult<Amount>;

    fn get_mint_record(&self, source_tx: &SourceTxId) -> DbResult<Option<MintRecord>>;

    fn is_processed(&self, source_tx: &SourceTxId) -> DbResult<bool>;

    fn get_bridged_balance(&self, account: &Identity) -> DbResult<Amount>;

    fn get_totals(&self) -> DbResult<BridgeTotals>;

    /// Size of the replay set. It only ever grows.
    fn processed_count(&self) -> DbResult<u64>;
}
