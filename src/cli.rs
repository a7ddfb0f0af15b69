//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "crypto-pb-client")]
#[command(version)]
#[command(about = "List crypto wallets and their transactions from a PocketBase backend", long_about = None)]
pub struct Cli {
    /// Backend base URL [default: http://127.0.0.1:8090]
    #[arg(long)]
    pub host: Option<String>,

    /// User email
    #[arg(long)]
    pub email: String,

    /// User password
    #[arg(long)]
    pub password: String,

    /// Wallet address to fetch transactions for
    #[arg(long)]
    pub wallet: Option<String>,

    /// Optional TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
