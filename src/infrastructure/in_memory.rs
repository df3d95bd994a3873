use crate::domain::account::{Account, AccountList};
use crate::domain::currency::CurrencyAmount;
use crate::domain::feed::{FeedItem, FeedItemList, FeedItemStatus};
use crate::domain::ports::BankApi;
use crate::domain::transfer::SavingsGoalTransferResponse;
use crate::error::{Result, RoundUpError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A call received by [`InMemoryBankApi`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Accounts,
    SettledTransactions {
        account_uid: Uuid,
        min: DateTime<Utc>,
        max: DateTime<Utc>,
    },
    AddMoney {
        account_uid: Uuid,
        savings_goal_uid: Uuid,
        transfer_uid: Uuid,
        amount: CurrencyAmount,
    },
}

#[derive(Debug, Clone)]
struct UpstreamFailure {
    status: u16,
    body: String,
}

impl UpstreamFailure {
    fn to_error(&self) -> RoundUpError {
        RoundUpError::Upstream {
            status: self.status,
            body: self.body.clone(),
        }
    }
}

#[derive(Default)]
struct State {
    accounts: Vec<Account>,
    feeds: HashMap<Uuid, Vec<FeedItem>>,
    feed_failure: Option<UpstreamFailure>,
    transfer_failures: HashMap<String, UpstreamFailure>,
    calls: Vec<RecordedCall>,
}

/// A scripted bank held entirely in memory.
///
/// Accounts, feeds and failures are configured up front; every call is
/// recorded so tests can assert on what the round-up service asked for.
/// Clones share the same state.
#[derive(Default, Clone)]
pub struct InMemoryBankApi {
    state: Arc<RwLock<State>>,
}

impl InMemoryBankApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_account(&self, account_uid: Uuid) {
        let mut state = self.state.write().await;
        state.accounts.push(Account { account_uid });
    }

    /// Appends items to an account's feed. Only `SETTLED` items are served back.
    pub async fn insert_feed_items(&self, account_uid: Uuid, items: Vec<FeedItem>) {
        let mut state = self.state.write().await;
        state.feeds.entry(account_uid).or_default().extend(items);
    }

    /// Makes every feed request fail with the given upstream status and body.
    pub async fn fail_feed(&self, status: u16, body: impl Into<String>) {
        let mut state = self.state.write().await;
        state.feed_failure = Some(UpstreamFailure {
            status,
            body: body.into(),
        });
    }

    /// Makes add-money calls in `currency` fail with the given upstream status and body.
    pub async fn fail_transfers(&self, currency: &str, status: u16, body: impl Into<String>) {
        let mut state = self.state.write().await;
        state.transfer_failures.insert(
            currency.to_string(),
            UpstreamFailure {
                status,
                body: body.into(),
            },
        );
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.state.read().await.calls.clone()
    }
}

#[async_trait]
impl BankApi for InMemoryBankApi {
    async fn accounts(&self, _token: &str) -> Result<AccountList> {
        let mut state = self.state.write().await;
        state.calls.push(RecordedCall::Accounts);
        Ok(AccountList {
            accounts: state.accounts.clone(),
        })
    }

    async fn settled_transactions_between(
        &self,
        _token: &str,
        account_uid: Uuid,
        min: DateTime<Utc>,
        max: DateTime<Utc>,
    ) -> Result<FeedItemList> {
        let mut state = self.state.write().await;
        state.calls.push(RecordedCall::SettledTransactions {
            account_uid,
            min,
            max,
        });
        if let Some(failure) = &state.feed_failure {
            return Err(failure.to_error());
        }

        let feed_items = state
            .feeds
            .get(&account_uid)
            .into_iter()
            .flatten()
            .filter(|item| item.status == FeedItemStatus::Settled)
            .cloned()
            .collect();
        Ok(FeedItemList { feed_items })
    }

    async fn add_money(
        &self,
        _token: &str,
        account_uid: Uuid,
        savings_goal_uid: Uuid,
        transfer_uid: Uuid,
        amount: CurrencyAmount,
    ) -> Result<SavingsGoalTransferResponse> {
        let mut state = self.state.write().await;
        let failure = state.transfer_failures.get(&amount.currency).cloned();
        state.calls.push(RecordedCall::AddMoney {
            account_uid,
            savings_goal_uid,
            transfer_uid,
            amount,
        });
        if let Some(failure) = failure {
            return Err(failure.to_error());
        }

        Ok(SavingsGoalTransferResponse {
            transfer_uid,
            success: true,
        })
    }
}
