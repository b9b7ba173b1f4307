use argh::FromArgs;
use lucid_db_types::traits::{DatabaseBackend, HeaderDatabase};
use lucid_identifiers::SequenceId;

use crate::{
    cli::OutputFormat,
    errors::{DisplayableError, DisplayedError},
    output::{
        header::{HeaderInfo, HeadersSummaryInfo},
        output,
    },
};

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "get-header")]
/// Get a committed header
pub(crate) struct GetHeaderArgs {
    /// sequence id
    #[argh(positional)]
    pub(crate) sequence_id: SequenceId,

    /// output format: "porcelain" (default) or "json"
    #[argh(option, short = 'o', default = "OutputFormat::Porcelain")]
    pub(crate) output_format: OutputFormat,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "get-headers-summary")]
/// Get finality log summary
pub(crate) struct GetHeadersSummaryArgs {
    /// output format: "porcelain" (default) or "json"
    #[argh(option, short = 'o', default = "OutputFormat::Porcelain")]
    pub(crate) output_format: OutputFormat,
}

/// Get a header by sequence id.
pub(crate) fn get_header(
    db: &impl DatabaseBackend,
    args: GetHeaderArgs,
) -> Result<(), DisplayedError> {
    let header = db
        .header_db()
        .get_header(args.sequence_id)
        .internal_error(format!("Failed to get header {}", args.sequence_id))?
        .ok_or_else(|| {
            DisplayedError::UserError(
                "No header found for sequence id".to_owned(),
                Box::new(args.sequence_id),
            )
        })?;

    output(&HeaderInfo::from_header(&header), args.output_format)
}

pub(crate) fn headers_summary(
    db: &impl DatabaseBackend,
) -> Result<HeadersSummaryInfo, DisplayedError> {
    let header_db = db.header_db();
    let header_count = header_db
        .get_header_count()
        .internal_error("Failed to count headers")?;
    let latest_sequence = header_db
        .get_latest_sequence()
        .internal_error("Failed to get latest sequence")?;

    let latest_current_hash = match latest_sequence {
        Some(seq) => header_db
            .get_header(seq)
            .internal_error(format!("Failed to get header {seq}"))?
            .map(|h| *h.current_hash()),
        None => None,
    };

    Ok(HeadersSummaryInfo {
        header_count,
        latest_sequence,
        latest_current_hash,
    })
}

/// Get header count and tip of the finality log.
pub(crate) fn get_headers_summary(
    db: &impl DatabaseBackend,
    args: GetHeadersSummaryArgs,
) -> Result<(), DisplayedError> {
    output(&headers_summary(db)?, args.output_format)
}
