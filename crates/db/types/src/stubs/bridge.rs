use std::collections::HashMap;

use lucid_chain_types::{BridgeTotals, MintRecord};
use lucid_identifiers::{Amount, Identity, SourceTxId};
use parking_lot::Mutex;

use crate::{traits::BridgeDatabase, types::MintCommit, DbResult};

#[derive(Debug, Default)]
struct BridgeTables {
    processed: HashMap<SourceTxId, MintRecord>,
    balances: HashMap<Identity, Amount>,
    totals: BridgeTotals,
}

/// All tables sit behind one lock, so each check-and-mark is a single step.
#[derive(Debug, Default)]
pub struct StubBridgeDb {
    tables: Mutex<BridgeTables>,
}

impl StubBridgeDb {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BridgeDatabase for StubBridgeDb {
    fn record_mint(
        &self,
        source_tx: &SourceTxId,
        record: MintRecord,
        max_supply: Amount,
    ) -> DbResult<MintCommit> {
        let mut tables = self.tables.lock();
        if tables.processed.contains_key(source_tx) {
            return Ok(MintCommit::AlreadyProcessed);
        }

        let current = tables.totals.total_minted;
        let total_minted = match current.checked_add(record.amount) {
            Some(total) if total <= max_supply => total,
            _ => {
                return Ok(MintCommit::CapExceeded {
                    total_minted: current,
                })
            }
        };

        tables.totals.total_minted = total_minted;
        tables.processed.insert(source_tx.clone(), record);
        Ok(MintCommit::Committed { total_minted })
    }

    fn record_burn(&self, account: &Identity, amount: Amount) -> DbResult<Amount> {
        let mut tables = self.tables.lock();
        tables.totals.total_bridged_out = tables.totals.total_bridged_out.saturating_add(amount);
        let bal = tables.balances.entry(*account).or_default();
        *bal = bal.saturating_add(amount);
        Ok(*bal)
    }

    fn get_mint_record(&self, source_tx: &SourceTxId) -> DbResult<Option<MintRecord>> {
        Ok(self.tables.lock().processed.get(source_tx).cloned())
    }

    fn is_processed(&self, source_tx: &SourceTxId) -> DbResult<bool> {
        Ok(self.tables.lock().processed.contains_key(source_tx))
    }

    fn get_bridged_balance(&self, account: &Identity) -> DbResult<Amount> {
        Ok(self
            .tables
            .lock()
            .balances
            .get(account)
            .copied()
            .unwrap_or_default())
    }

    fn get_totals(&self) -> DbResult<BridgeTotals> {
        Ok(self.tables.lock().totals)
    }

    fn processed_count(&self) -> DbResult<u64> {
        Ok(self.tables.lock().processed.len() as u64)
    }
}
