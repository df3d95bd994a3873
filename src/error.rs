use crate::domain::currency::CurrencyAmount;
use crate::domain::transfer::Transfer;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoundUpError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Upstream responded with status {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{} of {} round-up transfers failed", .failed.len(), .completed.len() + .failed.len())]
    Transfer {
        completed: Vec<Transfer>,
        failed: Vec<FailedTransfer>,
    },
    #[error("Transfer task did not complete: {0}")]
    TaskFailed(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A single currency whose add-money call did not succeed.
#[derive(Debug)]
pub struct FailedTransfer {
    pub amount: CurrencyAmount,
    pub error: RoundUpError,
}

pub type Result<T> = std::result::Result<T, RoundUpError>;
