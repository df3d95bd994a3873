use super::account::AccountList;
use super::currency::CurrencyAmount;
use super::feed::FeedItemList;
use super::transfer::SavingsGoalTransferResponse;
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// The subset of the banking API the round-up service talks to.
///
/// Every call carries the caller's bearer token, passed through untouched.
#[async_trait]
pub trait BankApi: Send + Sync {
    async fn accounts(&self, token: &str) -> Result<AccountList>;

    /// Settled feed items for an account with timestamps in `[min, max)`.
    async fn settled_transactions_between(
        &self,
        token: &str,
        account_uid: Uuid,
        min: DateTime<Utc>,
        max: DateTime<Utc>,
    ) -> Result<FeedItemList>;

    async fn add_money(
        &self,
        token: &str,
        account_uid: Uuid,
        savings_goal_uid: Uuid,
        transfer_uid: Uuid,
        amount: CurrencyAmount,
    ) -> Result<SavingsGoalTransferResponse>;
}

pub type BankApiRef = Arc<dyn BankApi>;
