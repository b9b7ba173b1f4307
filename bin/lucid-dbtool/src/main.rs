//! Offline inspection tool for a lucid sled datadir.
mod cli;
mod cmd;
mod db;
mod errors;
mod output;

use crate::{
    cli::{Cli, Command},
    cmd::{
        bridge::{get_bridge_stats, get_bridged_balance, get_mint_record},
        header::{get_header, get_headers_summary},
    },
    db::open_database,
};

fn main() {
    tracing_subscriber::fmt::init();

    let cli: Cli = argh::from_env();

    let db = open_database(&cli.datadir).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    let result = match cli.cmd {
        Command::GetHeader(args) => get_header(db.as_ref(), args),
        Command::GetHeadersSummary(args) => get_headers_summary(db.as_ref(), args),
        Command::GetBridgeStats(args) => get_bridge_stats(db.as_ref(), args),
        Command::GetMintRecord(args) => get_mint_record(db.as_ref(), args),
        Command::GetBridgedBalance(args) => get_bridged_balance(db.as_ref(), args),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
