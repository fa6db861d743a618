//! Redacting event formatter

use std::fmt;

use scrub_core::{DEFAULT_PII_FIELDS, FieldRedactor};
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::error::LogError;

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]");

/// Event formatter that redacts `field=value` pairs in the message before
/// assembling the output line.
///
/// The line envelope is `[SCRUB] <target> <LEVEL> <timestamp>: <message>`;
/// tag, field order, and the `": "` delimiter are fixed for downstream
/// consumers. Configuration is bound at construction and immutable, so the
/// formatter is safe to share across threads.
pub struct RedactingFormatter {
    redactor: FieldRedactor,
}

impl RedactingFormatter {
    /// Token substituted for every matched value.
    pub const REDACTION: &'static str = "***";
    /// Delimiter ending a field's value within a message.
    pub const SEPARATOR: &'static str = ";";
    /// Literal prefix of every output line.
    pub const TAG: &'static str = "[SCRUB]";

    /// Build a formatter redacting the given fields with the component
    /// constants for token and separator.
    pub fn new<S: AsRef<str>>(fields: &[S]) -> Result<Self, LogError> {
        Self::with_config(fields, Self::REDACTION, Self::SEPARATOR)
    }

    /// Build a formatter over the standard PII field set.
    pub fn with_default_fields() -> Result<Self, LogError> {
        Self::new(&DEFAULT_PII_FIELDS)
    }

    /// Build a formatter with a caller-supplied token and separator. Fails
    /// fast on a configuration the redactor rejects.
    pub fn with_config<S: AsRef<str>>(
        fields: &[S],
        redaction: &str,
        separator: &str,
    ) -> Result<Self, LogError> {
        let redactor = FieldRedactor::new(fields, redaction, separator)?;
        Ok(Self { redactor })
    }

    /// Assemble one output line from the envelope parts and the raw message.
    fn render_line(&self, target: &str, level: &Level, timestamp: &str, raw: &str) -> String {
        let message = self.redactor.redact(raw);
        format!("{} {} {} {}: {}", Self::TAG, target, level, timestamp, message)
    }
}

fn format_timestamp(now: OffsetDateTime) -> Result<String, time::error::Format> {
    now.format(TIMESTAMP_FORMAT)
}

impl<S, N> FormatEvent<S, N> for RedactingFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let timestamp = format_timestamp(OffsetDateTime::now_utc()).map_err(|_| fmt::Error)?;
        let line = self.render_line(
            metadata.target(),
            metadata.level(),
            &timestamp,
            &visitor.into_message(),
        );

        writeln!(writer, "{}", line)
    }
}

/// Collects the event's `message` field, plus any extra structured fields
/// as trailing `key=value` pairs. Extra fields join the message before
/// redaction so a sensitive value recorded as a structured field cannot
/// bypass the filter.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    extra: Vec<(String, String)>,
}

impl MessageVisitor {
    fn into_message(self) -> String {
        let mut out = self.message;
        for (key, value) in self.extra {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&key);
            out.push('=');
            out.push_str(&value);
        }
        out
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.extra.push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.extra
                .push((field.name().to_string(), format!("{:?}", value)));
        }
    }
}
