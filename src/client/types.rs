//! Record types and error definitions for the backend API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while talking to the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The password-authentication endpoint rejected the request.
    #[error("authentication failed with status {status}: {body}")]
    Authentication { status: u16, body: String },

    /// A record endpoint returned a non-success status.
    #[error("request to {endpoint} failed with status {status}: {body}")]
    Request {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The response body was not JSON or lacked an expected field.
    #[error("unexpected response: {0}")]
    Protocol(String),

    /// The request never produced a response (connect, DNS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Caller-supplied input was rejected before any request was made.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for backend operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Password credentials sent to the auth endpoint.
///
/// Serializes to the `{"identity": .., "password": ..}` payload.
#[derive(Clone, Serialize)]
pub struct Credentials {
    identity: String,
    password: String,
}

impl Credentials {
    /// Build credentials, rejecting empty identity or password.
    pub fn new(identity: impl Into<String>, password: impl Into<String>) -> ClientResult<Self> {
        let identity = identity.into();
        let password = password.into();
        if identity.trim().is_empty() {
            return Err(ClientError::InvalidInput("identity must not be empty".to_string()));
        }
        if password.is_empty() {
            return Err(ClientError::InvalidInput("password must not be empty".to_string()));
        }
        Ok(Self { identity, password })
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("identity", &self.identity)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque session token issued by the backend.
///
/// Sent back verbatim as the `Authorization` header value.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Body of a successful `auth-with-password` response.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: Option<String>,
    #[serde(default)]
    pub record: Option<AuthRecord>,
}

/// The authenticated user record. Only the fields we log are kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Paginated list envelope returned by every `records` endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResult<T> {
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub per_page: u64,
    #[serde(default)]
    pub total_items: i64,
    #[serde(default)]
    pub total_pages: i64,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// A row of the `cryptowallets` collection.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WalletRecord {
    pub address: String,
    /// `None` only when the key is absent; an explicit `null` is kept.
    #[serde(default, deserialize_with = "keep_null")]
    pub balance: Option<Value>,
    #[serde(default)]
    pub id: Option<String>,
    /// Ticker such as `BTC` or `ETH`.
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

impl WalletRecord {
    /// Balance as reported, or zero when the backend omitted it.
    pub fn balance_or_zero(&self) -> Value {
        self.balance.clone().unwrap_or_else(|| Value::from(0))
    }
}

/// Display-only fields accept any JSON value; `null` becomes `Some(Value::Null)`.
fn keep_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// A row of the `cryptotransactions` collection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TransactionRecord {
    #[serde(default)]
    pub txid: Option<String>,
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub confirmations: Option<Value>,
    #[serde(default)]
    pub id: Option<String>,
    /// `incoming` or `outgoing`.
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub confirmed: Option<bool>,
    #[serde(default)]
    pub timestamp: Option<String>,
}
