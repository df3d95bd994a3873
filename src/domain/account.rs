use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bank account visible to the caller's token.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_uid: Uuid,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct AccountList {
    pub accounts: Vec<Account>,
}

impl AccountList {
    /// Finds an account by its UID.
    ///
    /// The bank exposes no lookup-by-id endpoint, so this is a linear scan over
    /// the full list.
    pub fn find(&self, account_uid: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|a| a.account_uid == account_uid)
    }
}
