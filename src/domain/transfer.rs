use super::currency::CurrencyAmount;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of an add-money call to a savings goal.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct TopUpRequest {
    pub amount: CurrencyAmount,
}

impl From<CurrencyAmount> for TopUpRequest {
    fn from(amount: CurrencyAmount) -> Self {
        Self { amount }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoalTransferResponse {
    pub transfer_uid: Uuid,
    pub success: bool,
}

/// A round-up that the bank accepted into the savings goal.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Transfer {
    pub amount: CurrencyAmount,
    #[serde(flatten)]
    pub response: SavingsGoalTransferResponse,
}

/// Outcome of one round-up run, one transfer per currency.
///
/// Transfers are listed in the order their calls completed.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct RoundUpResult {
    pub transfers: Vec<Transfer>,
}
