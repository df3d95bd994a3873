//! Renderings of round-up outcomes for the command line.

pub mod csv;
pub mod json;

use crate::domain::currency::CurrencyAmount;
use crate::domain::transfer::{RoundUpResult, Transfer};
use crate::error::Result;
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

/// Writes the transfers that were applied.
pub fn write_transfers<W: Write>(format: OutputFormat, sink: W, transfers: &[Transfer]) -> Result<()> {
    match format {
        OutputFormat::Json => json::write_result(
            sink,
            &RoundUpResult {
                transfers: transfers.to_vec(),
            },
        ),
        OutputFormat::Csv => self::csv::TransferWriter::new(sink).write_transfers(transfers),
    }
}

/// Writes computed round-ups that have not been transferred.
pub fn write_round_ups<W: Write>(format: OutputFormat, sink: W, round_ups: &[CurrencyAmount]) -> Result<()> {
    match format {
        OutputFormat::Json => json::write_round_ups(sink, round_ups),
        OutputFormat::Csv => self::csv::TransferWriter::new(sink).write_round_ups(round_ups),
    }
}
