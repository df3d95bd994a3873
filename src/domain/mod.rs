//! Domain types and the round-up arithmetic.
//!
//! Nothing in here performs I/O; the bank is reached through the [`ports::BankApi`]
//! trait, implemented in `infrastructure`.

pub mod account;
pub mod calculator;
pub mod currency;
pub mod feed;
pub mod ports;
pub mod transfer;
