use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal places assumed for every currency.
///
/// Round-ups are always computed against a unit of 100 minor units; there is no
/// per-currency decimalisation lookup.
pub const MINOR_UNIT_SCALE: u32 = 2;

/// A monetary value expressed in the minor units of an ISO 4217 currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyAmount {
    /// Three-letter currency code, e.g. `GBP`.
    pub currency: String,
    /// Amount in minor units (pence, cents, ...).
    pub minor_units: i64,
}

impl CurrencyAmount {
    pub fn new(currency: impl Into<String>, minor_units: i64) -> Self {
        Self {
            currency: currency.into(),
            minor_units,
        }
    }

    /// The amount in major units, assuming two decimal places.
    pub fn major_units(&self) -> Decimal {
        Decimal::new(self.minor_units, MINOR_UNIT_SCALE)
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.major_units(), self.currency)
    }
}
