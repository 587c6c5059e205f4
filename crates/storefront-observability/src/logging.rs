//! Structured logging through `tracing-subscriber`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Log level used when `RUST_LOG` is not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `--verbose` lowers the default level to debug.
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }

    /// Directive understood by `EnvFilter`.
    pub fn as_directive(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    Json,
    /// Human-readable format (for terminals).
    #[default]
    Human,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "human" | "text" | "pretty" => Ok(LogFormat::Human),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// `RUST_LOG` when set and valid, otherwise `fallback`.
pub fn env_filter(fallback: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback.as_directive()))
}

/// Initialize tracing/logging for the process.
///
/// Logs go to stderr so they never interleave with command output on stdout.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(format: LogFormat, verbose: bool) {
    let filter = env_filter(LogLevel::from_verbose(verbose));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Human => builder.compact().without_time().try_init(),
    };
}
