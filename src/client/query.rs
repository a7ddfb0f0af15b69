//! Query parameters for the backend's `records` list endpoints.
//!
//! Filtering and sorting happen server-side; the client only builds the
//! expression strings.

use serde::Serialize;

/// Sort expression for newest-first transaction listings.
pub const SORT_NEWEST_FIRST: &str = "-timestamp";

/// `filter` / `sort` query parameters for a list request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl RecordQuery {
    /// Transactions belonging to `address`, newest first.
    ///
    /// The address is inserted verbatim. An address containing `'` changes
    /// the meaning of the filter; the backend is responsible for rejecting it.
    pub fn transactions_for_wallet(address: &str) -> Self {
        Self {
            filter: Some(wallet_address_filter(address)),
            sort: Some(SORT_NEWEST_FIRST.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.filter.is_none() && self.sort.is_none()
    }
}

/// Exact-match filter on the related wallet's address.
pub fn wallet_address_filter(address: &str) -> String {
    format!("wallet.address='{}'", address)
}
