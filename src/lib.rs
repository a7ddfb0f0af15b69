//! Client for a PocketBase-backed crypto wallet tracker.
//!
//! Authenticates with email and password, lists the user's wallet records
//! and optionally one wallet's transactions. Filtering, sorting and access
//! rules all live in the backend.

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod observability;
pub mod render;

pub use app::{run, AppError};
pub use client::ApiClient;
pub use config::ClientConfig;
