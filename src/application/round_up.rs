use crate::domain::calculator::compute_round_ups;
use crate::domain::currency::CurrencyAmount;
use crate::domain::ports::BankApiRef;
use crate::domain::transfer::{RoundUpResult, Transfer};
use crate::error::{FailedTransfer, Result, RoundUpError};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinSet;
use uuid::Uuid;

/// Length of the round-up window that starts at the requested instant.
pub const ROUND_UP_WINDOW_DAYS: i64 = 7;

/// Moves a week's worth of round-ups into a savings goal.
///
/// Cheap to clone; clones share the same [`BankApi`](crate::domain::ports::BankApi).
#[derive(Clone)]
pub struct RoundUpService {
    bank: BankApiRef,
}

impl RoundUpService {
    /// Creates a new `RoundUpService` on top of the given bank.
    pub fn new(bank: BankApiRef) -> Self {
        Self { bank }
    }

    /// Computes the round-ups owed for the week starting at `week_start`, without moving money.
    ///
    /// Fails with [`RoundUpError::NotFound`] before fetching the feed if the token
    /// cannot see `account_uid`.
    pub async fn round_ups_for_week(
        &self,
        token: &str,
        account_uid: Uuid,
        week_start: DateTime<Utc>,
    ) -> Result<Vec<CurrencyAmount>> {
        let accounts = self.bank.accounts(token).await?;
        let account = accounts
            .find(account_uid)
            .ok_or_else(|| RoundUpError::NotFound(format!("Account: {account_uid} not found")))?;

        let (start, end) = week_window(week_start);
        log::info!("Fetching settled transactions for account {account_uid} between {start} and {end}");
        let feed = self
            .bank
            .settled_transactions_between(token, account.account_uid, start, end)
            .await?;
        log::debug!("Received {} feed items", feed.feed_items.len());

        Ok(compute_round_ups(&feed.feed_items))
    }

    /// Rounds up the week starting at `week_start` and transfers one amount per
    /// currency into the savings goal.
    ///
    /// Transfers are issued concurrently and are not atomic: each currency
    /// succeeds or fails on its own and nothing is rolled back. Every transfer
    /// is awaited. If any of them failed the call returns
    /// [`RoundUpError::Transfer`] listing both the transfers that were applied
    /// and the ones that were not.
    pub async fn perform_round_up(
        &self,
        token: &str,
        account_uid: Uuid,
        savings_goal_uid: Uuid,
        week_start: DateTime<Utc>,
    ) -> Result<RoundUpResult> {
        let round_ups = self.round_ups_for_week(token, account_uid, week_start).await?;
        if round_ups.is_empty() {
            log::info!("No outbound transactions for account {account_uid}, nothing to transfer");
            return Ok(RoundUpResult::default());
        }

        let token: Arc<str> = Arc::from(token);
        let mut transfers = JoinSet::new();
        let mut pending = HashMap::with_capacity(round_ups.len());
        for amount in round_ups {
            let bank = self.bank.clone();
            let token = token.clone();
            let task_amount = amount.clone();
            let transfer_uid = Uuid::new_v4();
            log::info!("Transferring {amount} to savings goal {savings_goal_uid} as {transfer_uid}");

            let handle = transfers.spawn(async move {
                bank.add_money(&token, account_uid, savings_goal_uid, transfer_uid, task_amount)
                    .await
            });
            pending.insert(handle.id(), amount);
        }

        let mut completed = Vec::new();
        let mut failed = Vec::new();
        while let Some(joined) = transfers.join_next_with_id().await {
            let (id, result) = match joined {
                Ok((id, result)) => (id, result),
                Err(join_error) => (
                    join_error.id(),
                    Err(RoundUpError::TaskFailed(join_error.to_string())),
                ),
            };
            let Some(amount) = pending.remove(&id) else {
                log::warn!("Ignoring result of unknown transfer task {id}");
                continue;
            };

            match result {
                Ok(response) => {
                    log::info!("Transfer {} of {amount} completed", response.transfer_uid);
                    completed.push(Transfer { amount, response });
                }
                Err(error) => {
                    log::error!("Transfer of {amount} failed: {error}");
                    failed.push(FailedTransfer { amount, error });
                }
            }
        }

        if failed.is_empty() {
            Ok(RoundUpResult {
                transfers: completed,
            })
        } else {
            Err(RoundUpError::Transfer { completed, failed })
        }
    }
}

/// The half-open window `[week_start, week_start + 7 days)`.
pub fn week_window(week_start: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    (week_start, week_start + Duration::days(ROUND_UP_WINDOW_DAYS))
}
