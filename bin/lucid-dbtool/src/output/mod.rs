//! Output formatting for the porcelain and JSON formats.

pub(crate) mod bridge;
pub(crate) mod header;
mod helpers;
mod traits;

use serde::Serialize;

pub(crate) use self::traits::Formattable;
use crate::{
    cli::OutputFormat,
    errors::{DisplayableError, DisplayedError},
};

/// Renders `data` in the requested format.
pub(crate) fn render<T: Formattable + Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<String, DisplayedError> {
    match format {
        OutputFormat::Porcelain => Ok(data.format_porcelain()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(data).internal_error("Failed to serialize output")
        }
    }
}

/// Prints `data` to stdout in the requested format.
pub(crate) fn output<T: Formattable + Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<(), DisplayedError> {
    println!("{}", render(data, format)?);
    Ok(())
}
