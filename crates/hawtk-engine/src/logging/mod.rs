//! Logging setup.
//!
//! The crates only ever log through the `log` facade; this module is the
//! single place that installs a backend (`env_logger`).

mod init;

pub use init::{init_logging, LoggingConfig};
