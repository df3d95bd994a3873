use super::currency::CurrencyAmount;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    In,
    Out,
}

/// Settlement state of a feed item as reported by the bank.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedItemStatus {
    Upcoming,
    UpcomingCancelled,
    Pending,
    Reversed,
    Settled,
    Declined,
    Refunded,
    Retrying,
    AccountCheck,
    /// Any status introduced upstream after this model was written.
    #[serde(other)]
    Unknown,
}

/// A single transaction from an account's feed.
///
/// Only the fields needed for round-ups are modelled; everything else the bank
/// sends is dropped during deserialization.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct FeedItem {
    pub amount: CurrencyAmount,
    pub direction: Direction,
    pub status: FeedItemStatus,
}

impl FeedItem {
    pub fn new(amount: CurrencyAmount, direction: Direction, status: FeedItemStatus) -> Self {
        Self {
            amount,
            direction,
            status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeedItemList {
    pub feed_items: Vec<FeedItem>,
}
