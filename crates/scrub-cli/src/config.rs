use std::path::Path;

use serde::{Deserialize, Serialize};

/// Redaction configuration for scrub (scrub.toml)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub redact: RedactConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactConfig {
    /// Field names to redact, in substitution order
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,

    /// Token substituted for matched values
    #[serde(default = "default_redaction")]
    pub redaction: String,

    /// Delimiter ending a field's value
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for RedactConfig {
    fn default() -> Self {
        Self {
            fields: default_fields(),
            redaction: default_redaction(),
            separator: default_separator(),
        }
    }
}

fn default_fields() -> Vec<String> {
    scrub_core::DEFAULT_PII_FIELDS
        .iter()
        .map(|f| f.to_string())
        .collect()
}

fn default_redaction() -> String {
    "***".to_string()
}

fn default_separator() -> String {
    ";".to_string()
}

impl Config {
    /// Load config from the given path, or from ./scrub.toml when present.
    ///
    /// No file means defaults; an explicit path that cannot be read or
    /// parsed is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => {
                let default_path = Path::new("scrub.toml");
                if default_path.exists() {
                    Self::read(default_path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.redact.fields,
            vec!["name", "email", "phone", "ssn", "password"]
        );
        assert_eq!(config.redact.redaction, "***");
        assert_eq!(config.redact.separator, ";");
    }

    #[test]
    fn test_config_parse() {
        let toml_str = r#"
[redact]
fields = ["password", "ssn"]
redaction = "[HIDDEN]"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.redact.fields, vec!["password", "ssn"]);
        assert_eq!(config.redact.redaction, "[HIDDEN]");
        // Unset keys fall back to defaults
        assert_eq!(config.redact.separator, ";");
    }

    #[test]
    fn test_empty_file_is_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.redact.fields, Config::default().redact.fields);
    }
}
