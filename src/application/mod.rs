//! Application layer orchestrating a round-up run.
//!
//! [`round_up::RoundUpService`] walks the sequential lookup steps against the
//! bank, hands the feed to the calculator and then fans the resulting
//! per-currency transfers out as independent `tokio` tasks.

pub mod round_up;
