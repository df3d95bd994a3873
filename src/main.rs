use chrono::{DateTime, Utc};
use clap::Parser;
use log::LevelFilter;
use miette::{IntoDiagnostic, Result, miette};
use roundup::application::round_up::RoundUpService;
use roundup::config::{Config, DEFAULT_BASE_URL};
use roundup::error::RoundUpError;
use roundup::infrastructure::http::StarlingBankApi;
use roundup::interfaces::{OutputFormat, write_round_ups, write_transfers};
use std::io;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Parser)]
#[command(author, version, about = "Round up a week of spending into a savings goal", long_about = None)]
struct Cli {
    /// Account whose outbound transactions are rounded up
    #[arg(long)]
    account_uid: Uuid,

    /// Savings goal receiving the round-ups
    #[arg(long, required_unless_present = "dry_run")]
    savings_goal_uid: Option<Uuid>,

    /// Start of the week to round up, e.g. 2024-03-04T00:00:00Z
    #[arg(long)]
    week_start: DateTime<Utc>,

    /// Authorization header value, passed to the bank as-is
    #[arg(long, env = "STARLING_ACCESS_TOKEN", hide_env_values = true)]
    token: String,

    #[arg(long, env = "STARLING_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Compute and print the round-ups without transferring anything
    #[arg(long)]
    dry_run: bool,

    /// One of off, error, warn, info, debug, trace
    #[arg(long, short, default_value = "info")]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::new(cli.base_url).into_diagnostic()?;
    let bank = StarlingBankApi::from_config(&config).into_diagnostic()?;
    let service = RoundUpService::new(Arc::new(bank));
    let stdout = io::stdout();

    if cli.dry_run {
        let round_ups = service
            .round_ups_for_week(&cli.token, cli.account_uid, cli.week_start)
            .await
            .into_diagnostic()?;
        return write_round_ups(cli.format, stdout.lock(), &round_ups).into_diagnostic();
    }

    let Some(savings_goal_uid) = cli.savings_goal_uid else {
        return Err(miette!("--savings-goal-uid is required unless --dry-run is set"));
    };

    match service
        .perform_round_up(&cli.token, cli.account_uid, savings_goal_uid, cli.week_start)
        .await
    {
        Ok(result) => write_transfers(cli.format, stdout.lock(), &result.transfers).into_diagnostic(),
        Err(RoundUpError::Transfer { completed, failed }) => {
            // Applied transfers are not rolled back, so report them before failing.
            write_transfers(cli.format, stdout.lock(), &completed).into_diagnostic()?;
            for failure in &failed {
                eprintln!("Transfer of {} failed: {}", failure.amount, failure.error);
            }
            Err(miette!(
                "{} of {} round-up transfers failed",
                failed.len(),
                completed.len() + failed.len()
            ))
        }
        Err(e) => Err(e).into_diagnostic(),
    }
}
