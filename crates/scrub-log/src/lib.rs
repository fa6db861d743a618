//! Redacting log layer for scrub
//!
//! This crate provides:
//! - [`RedactingFormatter`], a `tracing_subscriber` event formatter that
//!   rewrites the event message through the field redactor before the line
//!   is assembled
//! - [`init`], which installs the formatter as the process-wide subscriber

pub mod error;
pub mod formatter;

pub use error::LogError;
pub use formatter::RedactingFormatter;

use tracing_subscriber::EnvFilter;

/// Install a redacting formatter as the global subscriber.
///
/// Construct once at startup and reuse for the process lifetime. The filter
/// defaults to `info` and honors `RUST_LOG`. Any failure here (a subscriber
/// already installed) must abort startup: a process that cannot build its
/// redacting logger must not log at all.
pub fn init(formatter: RedactingFormatter) -> Result<(), LogError> {
    tracing_subscriber::fmt()
        .event_format(formatter)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|e| LogError::Init(e.to_string()))
}
