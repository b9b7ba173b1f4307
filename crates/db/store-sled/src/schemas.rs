use lucid_chain_types::{BridgeTotals, Header, MintRecord};
use lucid_identifiers::{Amount, Identity, SequenceId, SourceTxId};

define_table!(
    /// Committed headers by sequence id.
    (HeaderSchema) SequenceId => Header
);

define_table!(
    /// Consumed source tx ids and what each one minted. Append-only.
    (ProcessedSourceTxSchema) SourceTxId => MintRecord
);

define_table!(
    /// Advisory bridged-out counter per account.
    (BridgedBalanceSchema) Identity => Amount
);

define_table!(
    /// Singleton row with the bridge totals, under [`TOTALS_KEY`].
    (BridgeTotalsSchema) u8 => BridgeTotals
);

define_table!(
    /// Store metadata, such as the schema version.
    (MetaSchema) String => u32
);

pub(crate) const TOTALS_KEY: u8 = 0;
