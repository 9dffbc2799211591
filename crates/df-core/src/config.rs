use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration loaded from `~/.dealflow/config.toml`.
///
/// Every section is optional in the file; missing keys take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub board: BoardConfig,
}

impl Config {
    /// Load config from `~/.dealflow/config.toml`, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(path)
        } else {
            let cfg = Config::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }

    /// Load from a specific path.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let cfg: Config = toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize config to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        self.validate()?;
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.general.validate()?;
        self.display.validate()?;
        self.notifications.validate()?;
        self.board.validate()?;
        Ok(())
    }

    fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".dealflow")
            .join("config.toml")
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(String),
    #[error("parse: {0}")]
    Parse(String),
    #[error("validation: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Section structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_project_name")]
    pub project_name: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl GeneralConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "general.log_level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

fn default_project_name() -> String {
    "dealflow".into()
}
fn default_log_level() -> String {
    "info".into()
}

/// Currency and date presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
    /// chrono `strftime` pattern.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            thousands_separator: default_thousands_separator(),
            decimal_separator: default_decimal_separator(),
            date_format: default_date_format(),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thousands_separator.is_empty() || self.decimal_separator.is_empty() {
            return Err(ConfigError::Validation(
                "display separators must not be empty".to_string(),
            ));
        }
        if self.thousands_separator == self.decimal_separator {
            return Err(ConfigError::Validation(
                "display.thousands_separator and display.decimal_separator must differ"
                    .to_string(),
            ));
        }
        if self.date_format.trim().is_empty() {
            return Err(ConfigError::Validation(
                "display.date_format must not be empty".to_string(),
            ));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Validation(format!(
                "display.date_format '{}' is not a valid strftime pattern",
                self.date_format
            )));
        }
        Ok(())
    }
}

fn default_currency_symbol() -> String {
    "R$".into()
}
fn default_thousands_separator() -> String {
    ".".into()
}
fn default_decimal_separator() -> String {
    ",".into()
}
fn default_date_format() -> String {
    "%d/%m/%Y".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_max_notifications")]
    pub max_notifications: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_notifications: default_max_notifications(),
        }
    }
}

impl NotificationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_notifications == 0 {
            return Err(ConfigError::Validation(
                "notifications.max_notifications must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}
fn default_max_notifications() -> usize {
    50
}

/// Kanban board behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Stage assigned to deals and agents created without one.
    #[serde(default = "default_stage_id")]
    pub default_stage_id: String,
    /// Shown in the move notification when the target stage is unknown.
    #[serde(default = "default_fallback_stage_label")]
    pub fallback_stage_label: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_stage_id: default_stage_id(),
            fallback_stage_label: default_fallback_stage_label(),
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_stage_id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "board.default_stage_id must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_stage_id() -> String {
    "stage-prospeccao".into()
}
fn default_fallback_stage_label() -> String {
    "another stage".into()
}
