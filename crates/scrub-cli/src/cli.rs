use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "scrub")]
#[command(about = "Log user records with PII fields redacted", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the redaction config file (default: ./scrub.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Redact this field instead of the configured set (repeatable)
    #[arg(long = "field")]
    pub fields: Vec<String>,
}
