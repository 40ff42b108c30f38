//! Shared utilities for accrue.

pub mod logging;

pub use logging::{init_logging, LogFormat, LoggingError};
