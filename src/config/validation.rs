//! Configuration validation.
//!
//! Serde handles syntax; this checks values. All errors are collected,
//! not just the first.

use tracing_subscriber::EnvFilter;
use url::Url;

use crate::config::schema::ClientConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Host is not an absolute URL.
    InvalidHost { host: String, reason: String },
    /// Host uses something other than http or https.
    UnsupportedScheme(String),
    /// A timeout was set to zero.
    ZeroTimeout(&'static str),
    /// Log level is not a valid filter directive.
    InvalidLogLevel(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidHost { host, reason } => {
                write!(f, "invalid host '{}': {}", host, reason)
            }
            ValidationError::UnsupportedScheme(scheme) => {
                write!(f, "unsupported host scheme '{}' (expected http or https)", scheme)
            }
            ValidationError::ZeroTimeout(field) => write!(f, "timeouts.{} must be > 0", field),
            ValidationError::InvalidLogLevel(level) => write!(f, "invalid log level '{}'", level),
        }
    }
}

/// Check a configuration, returning every problem found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.backend.host) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
            }
        }
        Err(e) => errors.push(ValidationError::InvalidHost {
            host: config.backend.host.clone(),
            reason: e.to_string(),
        }),
    }

    if config.timeouts.connect_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout("connect_secs"));
    }
    if config.timeouts.request_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout("request_secs"));
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
