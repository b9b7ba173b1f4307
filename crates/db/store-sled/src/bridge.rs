use lucid_chain_types::{BridgeTotals, MintRecord};
use lucid_db_types::{traits::BridgeDatabase, types::MintCommit, DbResult};
use lucid_identifiers::{Amount, Identity, SourceTxId};

use crate::schemas::{
    BridgeTotalsSchema, BridgedBalanceSchema, ProcessedSourceTxSchema, TOTALS_KEY,
};

define_sled_database!(
    pub struct BridgeDBSled {
        processed_tree: ProcessedSourceTxSchema,
        balance_tree: BridgedBalanceSchema,
        totals_tree: BridgeTotalsSchema,
    }
);

impl BridgeDatabase for BridgeDBSled {
    fn record_mint(
        &self,
        source_tx: &SourceTxId,
        record: MintRecord,
        max_supply: Amount,
    ) -> DbResult<MintCommit> {
        self.config
            .with_retry((&self.processed_tree, &self.totals_tree), |(pt, tt)| {
                if pt.get(source_tx)?.is_some() {
                    return Ok(MintCommit::AlreadyProcessed);
                }

                let mut totals = tt.get(&TOTALS_KEY)?.unwrap_or_default();
                let current = totals.total_minted;
                let Some(total_minted) = current
                    .checked_add(record.amount)
                    .filter(|total| *total <= max_supply)
                else {
                    return Ok(MintCommit::CapExceeded {
                        total_minted: current,
                    });
                };

                totals.total_minted = total_minted;
                pt.insert(source_tx, &record)?;
                tt.insert(&TOTALS_KEY, &totals)?;
                Ok(MintCommit::Committed { total_minted })
            })
    }

    fn record_burn(&self, account: &Identity, amount: Amount) -> DbResult<Amount> {
        self.config
            .with_retry((&self.balance_tree, &self.totals_tree), |(bt, tt)| {
                let balance = bt.get(account)?.unwrap_or_default().saturating_add(amount);

                let mut totals = tt.get(&TOTALS_KEY)?.unwrap_or_default();
                totals.total_bridged_out = totals.total_bridged_out.saturating_add(amount);

                bt.insert(account, &balance)?;
                tt.insert(&TOTALS_KEY, &totals)?;
                Ok(balance)
            })
    }

    fn get_mint_record(&self, source_tx: &SourceTxId) -> DbResult<Option<MintRecord>> {
        self.processed_tree.get(source_tx)
    }

    fn is_processed(&self, source_tx: &SourceTxId) -> DbResult<bool> {
        self.processed_tree.contains_key(source_tx)
    }

    fn get_bridged_balance(&self, account: &Identity) -> DbResult<Amount> {
        Ok(self.balance_tree.get(account)?.unwrap_or_default())
    }

    fn get_totals(&self) -> DbResult<BridgeTotals> {
        Ok(self.totals_tree.get(&TOTALS_KEY)?.unwrap_or_default())
    }

    fn processed_count(&self) -> DbResult<u64> {
        Ok(self.processed_tree.len() as u64)
    }
}
