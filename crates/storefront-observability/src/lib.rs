//! Observability setup for the storefront tools.
//!
//! This crate provides:
//! - `LogLevel` / `LogFormat` - Verbosity and output format choices
//! - `init` - Installs the process-wide `tracing` subscriber

mod logging;

pub use logging::*;
