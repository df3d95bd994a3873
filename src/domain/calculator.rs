use super::currency::CurrencyAmount;
use super::feed::{Direction, FeedItem};
use std::collections::HashMap;

/// Minor units in one whole currency unit. Fixed for every currency.
pub const ROUND_UP_UNIT: i64 = 100;

/// Round-up owed for a single outbound amount.
///
/// Always in `1..=100`: an amount that is already a whole unit still rounds up
/// by a full unit.
pub fn round_up(minor_units: i64) -> i64 {
    ROUND_UP_UNIT - minor_units.rem_euclid(ROUND_UP_UNIT)
}

/// Totals the round-ups of all outbound feed items, per currency.
///
/// Inbound items are ignored. Status is not checked here; callers are expected
/// to have fetched settled items only. The returned order is unspecified.
pub fn compute_round_ups(items: &[FeedItem]) -> Vec<CurrencyAmount> {
    let mut totals: HashMap<&str, i64> = HashMap::new();
    for item in items.iter().filter(|i| i.direction == Direction::Out) {
        *totals.entry(item.amount.currency.as_str()).or_default() +=
            round_up(item.amount.minor_units);
    }

    totals
        .into_iter()
        .map(|(currency, total)| CurrencyAmount::new(currency, total))
        .collect()
}
