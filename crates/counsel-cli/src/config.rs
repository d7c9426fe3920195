//! CLI configuration loading from file and environment variables.

use serde::Deserialize;
use thiserror::Error;

/// Top-level CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Case Analyzer settings.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Voice synthesis settings.
    #[serde(default)]
    pub voice: VoiceConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Case Analyzer configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    /// Gemini model identifier.
    #[serde(default = "default_model")]
    pub model: String,
}

/// Voice synthesis configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceConfig {
    /// Voice identifier for the primary provider.
    #[serde(default = "default_voice")]
    pub voice: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "counsel_analyzer=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_model() -> String {
    counsel_analyzer::DEFAULT_MODEL.to_string()
}

fn default_voice() -> String {
    counsel_voice::DEFAULT_VOICE.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
        }
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            voice: default_voice(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `COUNSEL_MODEL` overrides `analyzer.model`
/// - `COUNSEL_VOICE` overrides `voice.voice`
/// - `COUNSEL_LOG_LEVEL` overrides `logging.level`
/// - `COUNSEL_LOG_JSON` overrides `logging.json` (set to "true" to enable)
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    // Environment variable overrides
    if let Ok(model) = std::env::var("COUNSEL_MODEL") {
        config.analyzer.model = model;
    }
    if let Ok(voice) = std::env::var("COUNSEL_VOICE") {
        config.voice.voice = voice;
    }
    if let Ok(level) = std::env::var("COUNSEL_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("COUNSEL_LOG_JSON") {
        config.logging.json = json == "true";
    }

    Ok(config)
}
