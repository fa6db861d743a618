//! Core redaction logic for scrub
//!
//! This crate contains:
//! - The field redactor (separator-bounded `field=value` substitution)
//! - The default PII field set
//! - Core error types

pub mod error;
pub mod redactor;

pub use error::{RedactError, Result};
pub use redactor::{DEFAULT_PII_FIELDS, FieldRedactor, redact};
