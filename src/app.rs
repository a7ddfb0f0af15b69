//! The authenticate → wallets → transactions pipeline.

use std::io::Write;

use thiserror::Error;

use crate::client::{ApiClient, ClientError, Credentials};
use crate::config::ConfigError;
use crate::render;

/// Any failure that ends a run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Client(_) => 1,
            AppError::Config(_) => 2,
            // EX_IOERR
            AppError::Output(_) => 74,
        }
    }
}

/// Run the pipeline once, writing rendered records to `out`.
///
/// Wallets are written before the transaction request goes out, so they
/// stay on `out` even if that request fails.
pub async fn run<W: Write>(
    client: &ApiClient,
    credentials: &Credentials,
    wallet: Option<&str>,
    out: &mut W,
) -> Result<(), AppError> {
    let token = client.authenticate(credentials).await?;

    let wallets = client.list_wallets(&token).await?;
    tracing::info!(count = wallets.len(), "Wallets loaded");
    render::write_wallets(out, &wallets)?;

    if let Some(address) = wallet {
        let txs = client.list_transactions(&token, address).await?;
        tracing::info!(address = %address, count = txs.len(), "Transactions loaded");
        render::write_transactions(out, &txs)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::ValidationError;

    #[test]
    fn test_exit_codes() {
        let err = AppError::from(ClientError::Protocol("x".to_string()));
        assert_eq!(err.exit_code(), 1);

        let err = AppError::from(ConfigError::Validation(vec![ValidationError::ZeroTimeout(
            "request_secs",
        )]));
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("request_secs"));

        let err = AppError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_client_error_shown_unchanged() {
        let err = AppError::from(ClientError::Request {
            endpoint: "/api/collections/cryptowallets/records".to_string(),
            status: 403,
            body: "forbidden".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "request to /api/collections/cryptowallets/records failed with status 403: forbidden"
        );
    }
}
