//! Field redaction engine

use regex::{NoExpand, Regex};

use crate::error::{RedactError, Result};

/// Field names redacted out of the box.
pub const DEFAULT_PII_FIELDS: [&str; 5] = ["name", "email", "phone", "ssn", "password"];

/// Redactor for delimited `field=value` log messages.
///
/// One pattern is compiled per field at construction. Each pattern matches
/// the literal field name, a literal `=`, and the maximal run of characters
/// not containing the separator. Substitutions run sequentially in the
/// caller-supplied field order over the progressively rewritten message, so
/// a later field sees the output of earlier passes.
#[derive(Debug)]
pub struct FieldRedactor {
    // (replacement, pattern) per field, in caller order
    rules: Vec<(String, Regex)>,
}

impl FieldRedactor {
    /// Compile a redactor for the given fields, replacement token, and
    /// field separator.
    ///
    /// Fails on an empty separator: an instance built that way could never
    /// bound a value, and silently passing messages through unredacted is
    /// the one failure this crate must not allow.
    pub fn new<S: AsRef<str>>(fields: &[S], redaction: &str, separator: &str) -> Result<Self> {
        if separator.is_empty() {
            return Err(RedactError::EmptySeparator);
        }

        // Each separator character, escaped for character-class context.
        let stop_class: String = separator
            .chars()
            .map(|c| regex::escape(&c.to_string()))
            .collect();

        let mut rules = Vec::with_capacity(fields.len());
        for field in fields {
            let field = field.as_ref();
            // Field names come from a trusted static list, but escape anyway
            // so a metacharacter in a name stays literal.
            let pattern = format!("{}=[^{}]+", regex::escape(field), stop_class);
            rules.push((format!("{}={}", field, redaction), Regex::new(&pattern)?));
        }

        Ok(Self { rules })
    }

    /// Return a copy of `message` with every configured `field=value` pair
    /// rewritten to `field=<redaction>`.
    ///
    /// Fields without a match leave the message unchanged; malformed input
    /// is tolerated, never an error.
    pub fn redact(&self, message: &str) -> String {
        let mut result = message.to_string();
        for (replacement, pattern) in &self.rules {
            result = pattern
                .replace_all(&result, NoExpand(replacement))
                .to_string();
        }
        result
    }
}

/// One-shot redaction over `message`.
///
/// Equivalent to compiling a [`FieldRedactor`] and applying it once; use the
/// struct when redacting more than one message with the same configuration.
pub fn redact<S: AsRef<str>>(
    fields: &[S],
    redaction: &str,
    message: &str,
    separator: &str,
) -> Result<String> {
    Ok(FieldRedactor::new(fields, redaction, separator)?.redact(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_field() {
        let out = redact(&["password"], "***", "user=alice;password=hunter2;ip=10.0.0.1", ";")
            .unwrap();
        assert_eq!(out, "user=alice;password=***;ip=10.0.0.1");
    }

    #[test]
    fn test_default_field_set() {
        let redactor = FieldRedactor::new(&DEFAULT_PII_FIELDS, "***", ";").unwrap();
        let msg = "name=Bob;email=bob@x.com;phone=555;ssn=000;password=pw;ip=1.1.1.1;last_login=2024-01-01;user_agent=UA";
        assert_eq!(
            redactor.redact(msg),
            "name=***;email=***;phone=***;ssn=***;password=***;ip=1.1.1.1;last_login=2024-01-01;user_agent=UA"
        );
    }

    #[test]
    fn test_empty_field_set_passes_through() {
        let fields: [&str; 0] = [];
        let msg = "password=hunter2;ssn=000";
        assert_eq!(redact(&fields, "***", msg, ";").unwrap(), msg);
    }

    #[test]
    fn test_unmatched_field_leaves_message_unchanged() {
        let msg = "user=alice;ip=10.0.0.1";
        assert_eq!(redact(&["token"], "***", msg, ";").unwrap(), msg);
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(redact(&["password"], "***", "", ";").unwrap(), "");
    }

    #[test]
    fn test_idempotent() {
        let redactor = FieldRedactor::new(&DEFAULT_PII_FIELDS, "***", ";").unwrap();
        let msg = "name=Bob;email=bob@x.com;password=pw;ip=1.1.1.1";
        let once = redactor.redact(msg);
        let twice = redactor.redact(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_leakage() {
        let redactor = FieldRedactor::new(&["password", "ssn"], "***", ";").unwrap();
        let out = redactor.redact("password=s3cr3t;ssn=123-45-6789;host=db1");
        assert!(!out.contains("s3cr3t"));
        assert!(!out.contains("123-45-6789"));
        assert!(out.contains("host=db1"));
    }

    #[test]
    fn test_field_independence() {
        let msg = "a=1;b=2;c=3";
        let joint = redact(&["a", "b"], "***", msg, ";").unwrap();
        let sequential = redact(&["b"], "***", &redact(&["a"], "***", msg, ";").unwrap(), ";")
            .unwrap();
        assert_eq!(joint, sequential);
    }

    #[test]
    fn test_field_order_preserved() {
        // The second field's pattern runs over the first field's output.
        let out = redact(&["key", "k"], "X", "key=abc;k=def", ";").unwrap();
        assert_eq!(out, "key=X;k=X");
    }

    #[test]
    fn test_metacharacter_field_name_stays_literal() {
        let out = redact(&["a+b"], "***", "a+b=secret;ab=plain", ";").unwrap();
        assert_eq!(out, "a+b=***;ab=plain");
    }

    #[test]
    fn test_value_may_contain_spaces_and_equals() {
        let out = redact(&["name", "note"], "***", "name=Bob Smith;note=x=y;ip=1.1.1.1", ";")
            .unwrap();
        assert_eq!(out, "name=***;note=***;ip=1.1.1.1");
    }

    #[test]
    fn test_semicolon_space_convention() {
        let out = redact(&["email"], "***", "name=Bob; email=bob@x.com; ip=1.1.1.1", ";")
            .unwrap();
        assert_eq!(out, "name=Bob; email=***; ip=1.1.1.1");
    }

    #[test]
    fn test_empty_redaction_token() {
        let out = redact(&["password"], "", "password=pw;ip=1.1.1.1", ";").unwrap();
        assert_eq!(out, "password=;ip=1.1.1.1");
        // Still idempotent: an empty value never matches the one-or-more class.
        assert_eq!(redact(&["password"], "", &out, ";").unwrap(), out);
    }

    #[test]
    fn test_dollar_in_token_is_literal() {
        let out = redact(&["password"], "$0", "password=pw;ip=1.1.1.1", ";").unwrap();
        assert_eq!(out, "password=$0;ip=1.1.1.1");
    }

    #[test]
    fn test_multi_char_separator_excludes_each_char() {
        // Every separator character bounds the value.
        let out = redact(&["user"], "***", "user=alice&age=30", "&;").unwrap();
        assert_eq!(out, "user=***&age=30");
    }

    #[test]
    fn test_empty_separator_rejected() {
        let err = FieldRedactor::new(&["password"], "***", "").unwrap_err();
        assert!(matches!(err, RedactError::EmptySeparator));
    }

    #[test]
    fn test_input_not_mutated() {
        let msg = String::from("password=pw");
        let redactor = FieldRedactor::new(&["password"], "***", ";").unwrap();
        let _ = redactor.redact(&msg);
        assert_eq!(msg, "password=pw");
    }
}
