//! Plain-text output of wallet and transaction records.

use std::fmt::Display;
use std::io::{self, Write};

use serde_json::Value;

use crate::client::{TransactionRecord, WalletRecord};

/// Shown for a field the backend left out or sent as `null`.
pub const PLACEHOLDER: &str = "-";

/// `<address>, balance: <balance>`; a missing balance prints as `0`.
pub fn format_wallet(wallet: &WalletRecord) -> String {
    format!(
        "{}, balance: {}",
        wallet.address,
        display_value(&wallet.balance_or_zero())
    )
}

/// `<txid>, amount: <amount>, conf: <confirmations>`.
pub fn format_transaction(tx: &TransactionRecord) -> String {
    format!(
        "{}, amount: {}, conf: {}",
        or_placeholder(tx.txid.as_ref()),
        tx.amount.as_ref().map_or_else(|| PLACEHOLDER.to_string(), display_value),
        tx.confirmations.as_ref().map_or_else(|| PLACEHOLDER.to_string(), display_value),
    )
}

/// Strings print without quotes, `null` as the placeholder, anything else as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => PLACEHOLDER.to_string(),
        other => other.to_string(),
    }
}

fn or_placeholder<T: Display>(value: Option<&T>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}

/// Write the `Wallets:` section.
pub fn write_wallets<W: Write>(out: &mut W, wallets: &[WalletRecord]) -> io::Result<()> {
    writeln!(out, "Wallets:")?;
    for wallet in wallets {
        writeln!(out, "{}", format_wallet(wallet))?;
    }
    out.flush()
}

/// Write the `Transactions:` section.
pub fn write_transactions<W: Write>(out: &mut W, txs: &[TransactionRecord]) -> io::Result<()> {
    writeln!(out, "Transactions:")?;
    for tx in txs {
        writeln!(out, "{}", format_transaction(tx))?;
    }
    out.flush()
}
