use crate::domain::currency::CurrencyAmount;
use crate::domain::transfer::Transfer;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;
use uuid::Uuid;

#[derive(Serialize)]
struct Row<'a> {
    currency: &'a str,
    minor_units: i64,
    amount: Decimal,
    transfer_uid: Option<Uuid>,
    success: Option<bool>,
}

impl<'a> Row<'a> {
    fn round_up(amount: &'a CurrencyAmount) -> Self {
        Self {
            currency: &amount.currency,
            minor_units: amount.minor_units,
            amount: amount.major_units(),
            transfer_uid: None,
            success: None,
        }
    }

    fn transfer(transfer: &'a Transfer) -> Self {
        Self {
            transfer_uid: Some(transfer.response.transfer_uid),
            success: Some(transfer.response.success),
            ..Self::round_up(&transfer.amount)
        }
    }
}

/// Writes round-ups as CSV, one row per currency.
///
/// Columns are `currency,minor_units,amount,transfer_uid,success`; the last two
/// are empty for round-ups that were not transferred.
pub struct TransferWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TransferWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new().from_writer(sink),
        }
    }

    pub fn write_transfers(mut self, transfers: &[Transfer]) -> Result<()> {
        self.write_rows(transfers.iter().map(Row::transfer))
    }

    pub fn write_round_ups(mut self, round_ups: &[CurrencyAmount]) -> Result<()> {
        self.write_rows(round_ups.iter().map(Row::round_up))
    }

    fn write_rows<'a>(&mut self, rows: impl Iterator<Item = Row<'a>>) -> Result<()> {
        let mut empty = true;
        for row in rows {
            self.writer.serialize(row)?;
            empty = false;
        }
        if empty {
            self.writer
                .write_record(["currency", "minor_units", "amount", "transfer_uid", "success"])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
