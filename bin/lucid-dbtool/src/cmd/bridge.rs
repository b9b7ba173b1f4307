use argh::FromArgs;
use lucid_chain_types::BridgeStats;
use lucid_db_types::traits::{BridgeDatabase, DatabaseBackend};
use lucid_identifiers::{Amount, Identity, SourceTxId};

use crate::{
    cli::OutputFormat,
    errors::{DisplayableError, DisplayedError},
    output::{
        bridge::{BridgeStatsInfo, BridgedBalanceInfo, MintRecordInfo},
        output,
    },
};

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "get-bridge-stats")]
/// Get bridge supply counters
pub(crate) struct GetBridgeStatsArgs {
    /// configured max supply, used to compute headroom
    #[argh(option)]
    pub(crate) max_supply: Amount,

    /// output format: "porcelain" (default) or "json"
    #[argh(option, short = 'o', default = "OutputFormat::Porcelain")]
    pub(crate) output_format: OutputFormat,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "get-mint-record")]
/// Get the mint recorded for a source tx id
pub(crate) struct GetMintRecordArgs {
    /// source tx id, as text or 0x-prefixed hex
    #[argh(positional)]
    pub(crate) source_tx_id: String,

    /// output format: "porcelain" (default) or "json"
    #[argh(option, short = 'o', default = "OutputFormat::Porcelain")]
    pub(crate) output_format: OutputFormat,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "get-bridged-balance")]
/// Get the amount an account has burned toward the other ledger
pub(crate) struct GetBridgedBalanceArgs {
    /// account address (0x + 40 hex digits)
    #[argh(positional)]
    pub(crate) account: String,

    /// output format: "porcelain" (default) or "json"
    #[argh(option, short = 'o', default = "OutputFormat::Porcelain")]
    pub(crate) output_format: OutputFormat,
}

/// Parses a source tx id. `0x`-prefixed input is read as hex, anything else
/// as raw text.
pub(crate) fn parse_source_tx_id(input: &str) -> Result<SourceTxId, DisplayedError> {
    let id = match input.strip_prefix("0x") {
        Some(digits) => SourceTxId::new(
            hex::decode(digits).user_error(format!("Invalid hex source tx id {input}"))?,
        ),
        None => SourceTxId::from(input),
    };
    id.validate().user_error("Invalid source tx id")?;
    Ok(id)
}

pub(crate) fn bridge_stats(
    db: &impl DatabaseBackend,
    max_supply: Amount,
) -> Result<BridgeStatsInfo, DisplayedError> {
    let bridge_db = db.bridge_db();
    let totals = bridge_db
        .get_totals()
        .internal_error("Failed to get bridge totals")?;
    let processed_count = bridge_db
        .processed_count()
        .internal_error("Failed to count processed source txs")?;

    Ok(BridgeStatsInfo {
        stats: BridgeStats::from_totals(totals, max_supply),
        processed_count,
    })
}

/// Get bridge totals and headroom under `max_supply`.
pub(crate) fn get_bridge_stats(
    db: &impl DatabaseBackend,
    args: GetBridgeStatsArgs,
) -> Result<(), DisplayedError> {
    output(&bridge_stats(db, args.max_supply)?, args.output_format)
}

/// Get the mint record stored for a processed source tx id.
pub(crate) fn get_mint_record(
    db: &impl DatabaseBackend,
    args: GetMintRecordArgs,
) -> Result<(), DisplayedError> {
    let source_tx_id = parse_source_tx_id(&args.source_tx_id)?;
    let record = db
        .bridge_db()
        .get_mint_record(&source_tx_id)
        .internal_error(format!("Failed to get mint record for {source_tx_id}"))?
        .ok_or_else(|| {
            DisplayedError::UserError(
                "Source tx id was never processed".to_owned(),
                Box::new(source_tx_id.clone()),
            )
        })?;

    let info = MintRecordInfo {
        source_tx_id: &source_tx_id,
        account: record.account,
        amount: record.amount,
    };
    output(&info, args.output_format)
}

/// Get the advisory bridged-out counter for an account.
pub(crate) fn get_bridged_balance(
    db: &impl DatabaseBackend,
    args: GetBridgedBalanceArgs,
) -> Result<(), DisplayedError> {
    let account: Identity = args
        .account
        .parse()
        .user_error(format!("Invalid account {}", args.account))?;
    let bridged_balance = db
        .bridge_db()
        .get_bridged_balance(&account)
        .internal_error(format!("Failed to get bridged balance for {account}"))?;

    let info = BridgedBalanceInfo {
        account: &account,
        bridged_balance,
    };
    output(&info, args.output_format)
}
