use crate::domain::currency::CurrencyAmount;
use crate::domain::transfer::RoundUpResult;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoundUps<'a> {
    round_ups: &'a [CurrencyAmount],
}

pub fn write_result<W: Write>(mut sink: W, result: &RoundUpResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, result)?;
    writeln!(sink)?;
    Ok(())
}

pub fn write_round_ups<W: Write>(mut sink: W, round_ups: &[CurrencyAmount]) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, &RoundUps { round_ups })?;
    writeln!(sink)?;
    Ok(())
}
