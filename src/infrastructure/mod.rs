//! Adapters implementing [`BankApi`](crate::domain::ports::BankApi).

pub mod http;
pub mod in_memory;
