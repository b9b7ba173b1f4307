use std::{path::PathBuf, str::FromStr};

use argh::FromArgs;

use crate::cmd::{
    bridge::{GetBridgeStatsArgs, GetBridgedBalanceArgs, GetMintRecordArgs},
    header::{GetHeaderArgs, GetHeadersSummaryArgs},
};

/// Inspect the finality log and bridge state of a lucid datadir.
#[derive(FromArgs, PartialEq, Debug)]
pub(crate) struct Cli {
    /// node datadir
    #[argh(option, short = 'd', default = "PathBuf::from(\"lucid-data\")")]
    pub(crate) datadir: PathBuf,

    #[argh(subcommand)]
    pub(crate) cmd: Command,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub(crate) enum Command {
    GetHeader(GetHeaderArgs),
    GetHeadersSummary(GetHeadersSummaryArgs),
    GetBridgeStats(GetBridgeStatsArgs),
    GetMintRecord(GetMintRecordArgs),
    GetBridgedBalance(GetBridgedBalanceArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Porcelain,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "porcelain" => Ok(OutputFormat::Porcelain),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format {other}, expected porcelain or json")),
        }
    }
}
