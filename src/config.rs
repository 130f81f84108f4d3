use serde::Deserialize;
use thiserror::Error;

/// Built-in settings for the demonstration run. Nothing is read from disk or
/// the environment.
pub const DEFAULT_CONFIG: &str = r#"
color = true
log_filter = "warn"
sqrt_inputs = []
"#;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid log filter '{0}'")]
    InvalidLogFilter(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Colorize console labels.
    pub color: bool,
    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,
    /// Extra `root` inputs printed after the fixed sequence.
    pub sqrt_inputs: Vec<f64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            color: true,
            log_filter: "warn".to_string(),
            sqrt_inputs: Vec::new(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        if config.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidLogFilter(config.log_filter));
        }
        Ok(config)
    }

    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }
}
