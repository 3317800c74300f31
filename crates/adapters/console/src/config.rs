//! Console output configuration.

use std::str::FromStr;

use homeremote_domain::error::UnknownVariantError;
use homeremote_domain::language::Language;
use serde::Deserialize;

/// How each status message is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One localised, human-readable line per message.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(UnknownVariantError::new("output format", s)),
        }
    }
}

/// Configuration for the console sink.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Language of text output. Ignored for JSON.
    pub language: Language,
    /// Output format.
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_english_text() {
        let config = ConsoleConfig::default();
        assert_eq!(config.language, Language::En);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn should_deserialize_from_toml() {
        let config: ConsoleConfig = toml::from_str(
            "
            language = 'ru'
            format = 'json'
            ",
        )
        .unwrap();
        assert_eq!(config.language, Language::Ru);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn should_fill_missing_fields_with_defaults() {
        let config: ConsoleConfig = toml::from_str("format = 'json'").unwrap();
        assert_eq!(config.language, Language::En);
    }

    #[test]
    fn should_parse_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
