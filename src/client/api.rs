//! HTTP client for the backend's collection API.
//!
//! # Responsibilities
//! - Exchange password credentials for a session token
//! - List wallet records for the authenticated user
//! - List a wallet's transactions, filtered and sorted server-side
//!
//! Every call is a single request: no retries, no caching.

use std::time::Duration;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::client::query::RecordQuery;
use crate::client::types::{
    AuthResponse, ClientError, ClientResult, Credentials, ListResult, SessionToken,
    TransactionRecord, WalletRecord,
};
use crate::config::ClientConfig;

/// Password-authentication endpoint for the `users` auth collection.
pub const AUTH_PATH: &str = "/api/collections/users/auth-with-password";

/// Collection holding wallet records.
pub const WALLETS_COLLECTION: &str = "cryptowallets";

/// Collection holding transaction records.
pub const TRANSACTIONS_COLLECTION: &str = "cryptotransactions";

/// Path of the list endpoint for `collection`.
pub fn records_path(collection: &str) -> String {
    format!("/api/collections/{}/records", collection)
}

/// Client for one backend host.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    /// Host without trailing slash.
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured host.
    ///
    /// Timeouts are only applied when the configuration sets them.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if !config.backend.system_proxy {
            builder = builder.no_proxy();
        }
        if let Some(secs) = config.timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.timeouts.connect_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.backend.host.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Exchange credentials for a session token.
    pub async fn authenticate(&self, credentials: &Credentials) -> ClientResult<SessionToken> {
        let url = self.url(AUTH_PATH);
        tracing::debug!(url = %url, identity = %credentials.identity(), "Authenticating");

        let resp = self.client.post(&url).json(credentials).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Authentication rejected");
            return Err(ClientError::Authentication {
                status: status.as_u16(),
                body: text,
            });
        }

        let auth: AuthResponse = serde_json::from_str(&text)
            .map_err(|e| ClientError::Protocol(format!("{}: {}", AUTH_PATH, e)))?;
        let token = auth.token.ok_or_else(|| {
            ClientError::Protocol(format!("{}: response has no token field", AUTH_PATH))
        })?;

        if let Some(record) = auth.record {
            tracing::debug!(
                user_id = record.id.as_deref().unwrap_or("-"),
                email = record.email.as_deref().unwrap_or("-"),
                "Authenticated"
            );
        }

        Ok(SessionToken::new(token))
    }

    /// List the wallet records visible to `token`.
    pub async fn list_wallets(&self, token: &SessionToken) -> ClientResult<Vec<WalletRecord>> {
        let list: ListResult<WalletRecord> = self
            .list_records(WALLETS_COLLECTION, token, &RecordQuery::default())
            .await?;
        Ok(list.items)
    }

    /// List transactions of the wallet at `address`, newest first.
    pub async fn list_transactions(
        &self,
        token: &SessionToken,
        address: &str,
    ) -> ClientResult<Vec<TransactionRecord>> {
        let query = RecordQuery::transactions_for_wallet(address);
        let list: ListResult<TransactionRecord> = self
            .list_records(TRANSACTIONS_COLLECTION, token, &query)
            .await?;
        Ok(list.items)
    }

    /// GET one page of `collection` with the token attached.
    pub async fn list_records<T: DeserializeOwned>(
        &self,
        collection: &str,
        token: &SessionToken,
        query: &RecordQuery,
    ) -> ClientResult<ListResult<T>> {
        let path = records_path(collection);
        let url = self.url(&path);

        let mut request = self
            .client
            .get(&url)
            .header(AUTHORIZATION, authorization_value(token)?);
        if !query.is_empty() {
            request = request.query(query);
        }

        tracing::debug!(url = %url, filter = ?query.filter, sort = ?query.sort, "Listing records");
        let resp = request.send().await?;
        let list: ListResult<T> = read_json(&path, resp).await?;

        tracing::debug!(
            collection = collection,
            items = list.items.len(),
            total_items = list.total_items,
            "Records received"
        );
        Ok(list)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// The token goes out verbatim, with no scheme prefix.
fn authorization_value(token: &SessionToken) -> ClientResult<HeaderValue> {
    let mut value = HeaderValue::from_str(token.as_str()).map_err(|_| {
        ClientError::Protocol("session token is not a valid header value".to_string())
    })?;
    value.set_sensitive(true);
    Ok(value)
}

async fn read_json<T: DeserializeOwned>(endpoint: &str, resp: Response) -> ClientResult<T> {
    let status = resp.status();
    let text = resp.text().await?;

    if !status.is_success() {
        return Err(ClientError::Request {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body: text,
        });
    }

    serde_json::from_str(&text).map_err(|e| ClientError::Protocol(format!("{}: {}", endpoint, e)))
}
