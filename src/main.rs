//! crypto-pb-client
//!
//! ```text
//!   --email/--password ──▶ POST auth-with-password ──▶ token
//!                                                      │
//!                          GET cryptowallets/records ◀─┤  Authorization: <token>
//!                                  │                   │
//!                              "Wallets:"              │
//!                                                      │
//!   --wallet (optional) ─▶ GET cryptotransactions/records?filter=..&sort=-timestamp
//!                                  │
//!                            "Transactions:"
//! ```
//!
//! Any failure aborts the run with a non-zero exit code.

use std::process::ExitCode;

use clap::Parser;

use crypto_pb_client::cli::Cli;
use crypto_pb_client::client::{ApiClient, Credentials};
use crypto_pb_client::config::resolve_config;
use crypto_pb_client::observability::logging;
use crypto_pb_client::AppError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Run failed");
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = resolve_config(cli.config.as_deref(), cli.host.as_deref())?;
    logging::init(&config.observability.log_level);

    tracing::info!(
        host = %config.backend.host,
        request_timeout_secs = ?config.timeouts.request_secs,
        "Configuration loaded"
    );

    let credentials = Credentials::new(cli.email, cli.password)?;
    let client = ApiClient::new(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    crypto_pb_client::run(&client, &credentials, cli.wallet.as_deref(), &mut out).await
}
