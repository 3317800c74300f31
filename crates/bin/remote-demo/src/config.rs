//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `homeremote.toml` in the working directory. Every field has a
//! default so the file is optional, and with neither file nor variables the
//! demo prints its canonical English output. Environment variables take
//! precedence over file values.
//!
//! Loading never fails: a file that cannot be read or parsed is replaced by
//! the defaults and an unsupported override value is skipped. The problems
//! are handed back so the caller can log them once logging is up.

use std::path::Path;

use homeremote_adapter_console::{ConsoleConfig, OutputFormat};
use homeremote_domain::error::UnknownVariantError;
use homeremote_domain::language::Language;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Name of the optional configuration file.
pub const CONFIG_FILE: &str = "homeremote.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Console output settings.
    pub output: ConsoleConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `homeremote.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// Returns the effective configuration together with every problem that
    /// was skipped along the way.
    #[must_use]
    pub fn load() -> (Self, Vec<ConfigError>) {
        Self::load_from(CONFIG_FILE, |name| std::env::var(name).ok())
    }

    /// [`load`](Self::load) with an explicit file path and variable lookup.
    #[must_use]
    pub fn load_from(
        path: impl AsRef<Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> (Self, Vec<ConfigError>) {
        let mut problems = Vec::new();
        let mut config = Self::from_file(path).unwrap_or_else(|err| {
            problems.push(err);
            Self::default()
        });
        problems.extend(config.apply_overrides(lookup));
        (config, problems)
    }

    fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides looked up by variable name.
    ///
    /// `HOMEREMOTE_LANG`, `HOMEREMOTE_FORMAT`, `HOMEREMOTE_LOG`, then
    /// `RUST_LOG`, which wins over `HOMEREMOTE_LOG`. A language or format
    /// variable naming an unsupported value leaves the field unchanged and is
    /// reported as [`ConfigError::Override`].
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<ConfigError> {
        let mut problems = Vec::new();
        if let Some(val) = lookup("HOMEREMOTE_LANG") {
            match parse_override::<Language>("HOMEREMOTE_LANG", &val) {
                Ok(language) => self.output.language = language,
                Err(err) => problems.push(err),
            }
        }
        if let Some(val) = lookup("HOMEREMOTE_FORMAT") {
            match parse_override::<OutputFormat>("HOMEREMOTE_FORMAT", &val) {
                Ok(format) => self.output.format = format,
                Err(err) => problems.push(err),
            }
        }
        if let Some(val) = lookup("HOMEREMOTE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        problems
    }
}

fn parse_override<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = UnknownVariantError>,
{
    value
        .parse()
        .map_err(|source| ConfigError::Override { name, source })
}

impl LoggingConfig {
    /// Build the log filter from [`filter`](Self::filter).
    ///
    /// # Errors
    ///
    /// Returns the parse error when any directive is invalid, rather than
    /// silently dropping it.
    pub fn env_filter(&self) -> Result<EnvFilter, ParseError> {
        EnvFilter::try_new(&self.filter)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "remote_demo=info,homeremote=warn".to_string(),
        }
    }
}

/// Configuration problems. None of them stop the demo.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// An environment override holds an unsupported value.
    #[error("invalid value in {name}")]
    Override {
        name: &'static str,
        #[source]
        source: UnknownVariantError,
    },
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    /// A config file under the system temp dir, removed on drop.
    struct TempConfig(PathBuf);

    impl TempConfig {
        fn new(name: &str, content: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "homeremote-{}-{name}.toml",
                std::process::id()
            ));
            std::fs::write(&path, content).unwrap();
            Self(path)
        }
    }

    impl Drop for TempConfig {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.output.language, Language::En);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.logging.filter, "remote_demo=info,homeremote=warn");
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.output.language, Language::En);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [output]
            language = 'ru'
            format = 'json'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.output.language, Language::Ru);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [output]
            language = 'ru'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.output.language, Language::Ru);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.logging.filter, "remote_demo=info,homeremote=warn");
    }

    #[test]
    fn should_reject_unknown_language_in_toml() {
        let result: Result<Config, _> = toml::from_str("[output]\nlanguage = 'fr'");
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let (config, problems) = Config::load_from("nonexistent.toml", env(&[]));
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(problems.is_empty());
    }

    #[test]
    fn should_load_settings_from_file() {
        let file = TempConfig::new(
            "valid",
            "[output]\nlanguage = 'ru'\nformat = 'json'\n[logging]\nfilter = 'debug'\n",
        );
        let (config, problems) = Config::load_from(&file.0, env(&[]));
        assert!(problems.is_empty());
        assert_eq!(config.output.language, Language::Ru);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_apply_overrides_on_top_of_file() {
        let file = TempConfig::new("layered", "[output]\nlanguage = 'ru'\n");
        let (config, problems) =
            Config::load_from(&file.0, env(&[("HOMEREMOTE_LANG", "en"), ("RUST_LOG", "trace")]));
        assert!(problems.is_empty());
        assert_eq!(config.output.language, Language::En);
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_fall_back_to_defaults_when_file_is_malformed() {
        let file = TempConfig::new("malformed", "garbage {{{");
        let (config, problems) = Config::load_from(&file.0, env(&[("HOMEREMOTE_FORMAT", "json")]));
        assert!(matches!(problems.as_slice(), [ConfigError::Parse(_)]));
        assert_eq!(config.output.language, Language::En);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn should_fall_back_to_defaults_when_file_is_unreadable() {
        // A directory exists but cannot be read as a file.
        let (config, problems) = Config::load_from(std::env::temp_dir(), env(&[]));
        assert!(matches!(problems.as_slice(), [ConfigError::Io(_)]));
        assert_eq!(config.logging.filter, "remote_demo=info,homeremote=warn");
    }

    #[test]
    fn should_leave_config_untouched_without_variables() {
        let mut config = Config::default();
        assert!(config.apply_overrides(env(&[])).is_empty());
        assert_eq!(config.output.language, Language::En);
        assert_eq!(config.logging.filter, "remote_demo=info,homeremote=warn");
    }

    #[test]
    fn should_apply_language_and_format_overrides() {
        let mut config = Config::default();
        let problems = config.apply_overrides(env(&[
            ("HOMEREMOTE_LANG", "ru"),
            ("HOMEREMOTE_FORMAT", "json"),
        ]));
        assert!(problems.is_empty());
        assert_eq!(config.output.language, Language::Ru);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn should_prefer_rust_log_over_homeremote_log() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("HOMEREMOTE_LOG", "info"), ("RUST_LOG", "trace")]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_skip_invalid_override_and_keep_the_rest() {
        let mut config = Config::default();
        let problems = config.apply_overrides(env(&[
            ("HOMEREMOTE_LANG", "fr"),
            ("HOMEREMOTE_FORMAT", "json"),
        ]));
        assert_eq!(problems.len(), 1);
        assert!(matches!(
            problems[0],
            ConfigError::Override {
                name: "HOMEREMOTE_LANG",
                ..
            }
        ));
        assert_eq!(problems[0].to_string(), "invalid value in HOMEREMOTE_LANG");
        assert_eq!(config.output.language, Language::En);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn should_build_default_log_filter() {
        assert!(LoggingConfig::default().env_filter().is_ok());
    }

    #[test]
    fn should_reject_log_filter_with_invalid_level() {
        let logging = LoggingConfig {
            filter: "remote_demo=loud".to_string(),
        };
        assert!(logging.env_filter().is_err());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
