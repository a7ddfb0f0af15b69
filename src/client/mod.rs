//! Backend API client subsystem.
//!
//! # Data Flow
//! ```text
//! Credentials (CLI)
//!     → api.rs authenticate (POST auth-with-password)
//!     → SessionToken
//!     → api.rs list_wallets / list_transactions (GET records, Authorization: <token>)
//!     → types.rs ListResult<WalletRecord | TransactionRecord>
//! ```
//!
//! # Security Constraints
//! - Password and token are never logged
//! - `Debug` output of credentials and tokens is redacted

pub mod api;
pub mod query;
pub mod types;

pub use api::ApiClient;
pub use query::RecordQuery;
pub use types::{
    ClientError, ClientResult, Credentials, ListResult, SessionToken, TransactionRecord,
    WalletRecord,
};
