//! Observability subsystem.
//!
//! Only structured logging for now; the client is a short-lived process
//! with nothing worth exporting as metrics.

pub mod logging;
