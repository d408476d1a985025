//! Logging utilities.
//!
//! This module centralizes logger initialization. Library code only ever
//! talks to the `log` facade; the backend is chosen here.

mod init;

pub use init::{init_logging, LoggingConfig};
