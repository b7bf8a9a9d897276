use crate::error::{EzConsoleError, Result};
use crate::loading::{LoadingOptions, DEFAULT_DOTS, DEFAULT_UPDATES_PER_SECOND};
use crate::output::{Palette, StyleMode};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// The base config directory name under ~/.config/
const CONFIG_DIR_NAME: &str = "ezconsole";

/// The filename for the global configuration file.
const GLOBAL_CONFIG_FILENAME: &str = "config.toml";

/// Environment variable that points at an alternative config file.
pub const CONFIG_PATH_ENV: &str = "EZCONSOLE_CONFIG";

// ============================================================================
// Configuration
// ============================================================================

/// User preferences for colors, prompts, loading animations and logging.
///
/// Every section and field has a default, so partial config files work.
///
/// # Example
///
/// ```toml
/// color_mode = "auto"
///
/// [palette]
/// prompt = "yellow"
/// error = "red"
///
/// [loading]
/// dots = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// When to emit ANSI styling: `auto`, `always` or `never`.
    #[serde(default)]
    pub color_mode: StyleMode,

    #[serde(default)]
    pub palette: Palette,

    #[serde(default)]
    pub prompt: PromptConfig,

    #[serde(default)]
    pub loading: LoadingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Attempts before a prompt gives up. `0` keeps asking forever.
    #[serde(default)]
    pub max_attempts: u32,
}

impl PromptConfig {
    pub fn attempt_limit(&self) -> Option<u32> {
        (self.max_attempts > 0).then_some(self.max_attempts)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingConfig {
    #[serde(default = "default_updates_per_second")]
    pub updates_per_second: u32,

    #[serde(default = "default_dots")]
    pub dots: usize,
}

fn default_updates_per_second() -> u32 {
    DEFAULT_UPDATES_PER_SECOND
}

fn default_dots() -> usize {
    DEFAULT_DOTS
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            updates_per_second: default_updates_per_second(),
            dots: default_dots(),
        }
    }
}

impl LoadingConfig {
    /// Timed animation options for `duration_secs` using these defaults.
    pub fn options(&self, duration_secs: u32) -> LoadingOptions {
        LoadingOptions::new(duration_secs)
            .updates_per_second(self.updates_per_second)
            .dots(self.dots)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level for ezconsole's own diagnostics: off, error, warn, info, debug, trace.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ============================================================================
// Config Validation
// ============================================================================

use std::error::Error;
use std::fmt;

/// Error type for configuration validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `loading.dots` is zero.
    ZeroDots,
    /// `loading.updates_per_second` is zero.
    ZeroUpdatesPerSecond,
    /// `logging.level` is not a known level.
    InvalidLogLevel(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDots => write!(f, "`loading.dots` must be at least 1"),
            ConfigError::ZeroUpdatesPerSecond => {
                write!(f, "`loading.updates_per_second` must be at least 1")
            }
            ConfigError::InvalidLogLevel(level) => write!(
                f,
                "Unknown log level `{}`. Use one of: off, error, warn, info, debug, trace",
                level
            ),
        }
    }
}

impl Error for ConfigError {}

/// Validate a configuration for values the helpers cannot run with.
pub fn validate_config(config: &Config) -> std::result::Result<(), ConfigError> {
    if config.loading.dots == 0 {
        return Err(ConfigError::ZeroDots);
    }
    if config.loading.updates_per_second == 0 {
        return Err(ConfigError::ZeroUpdatesPerSecond);
    }
    if LevelFilter::from_str(&config.logging.level).is_err() {
        return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
    }
    Ok(())
}

// ============================================================================
// Config File Management
// ============================================================================

/// Get the ezconsole config directory path (~/.config/ezconsole/).
///
/// Does not create the directory.
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| EzConsoleError::Config("Could not determine home directory".to_string()))?;
    Ok(config_dir_at(&home))
}

/// The config directory below an explicit home directory.
pub fn config_dir_at(home: &Path) -> PathBuf {
    home.join(".config").join(CONFIG_DIR_NAME)
}

/// Get the path to the global config file.
///
/// `$EZCONSOLE_CONFIG` wins when set; otherwise `~/.config/ezconsole/config.toml`.
pub fn global_config_path() -> Result<PathBuf> {
    match env::var_os(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(config_dir()?.join(GLOBAL_CONFIG_FILENAME)),
    }
}

/// Load and validate the global configuration.
///
/// A missing file yields the defaults. Use `ezconsole config init` to write one.
pub fn load_global_config() -> Result<Config> {
    let path = global_config_path()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    load_config_from_path(&path)
}

/// Load and validate a config from a specific path without any fallback logic.
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(EzConsoleError::ConfigNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content).map_err(|e| {
        EzConsoleError::Config(format!(
            "Failed to parse config file at {:?}: {}",
            path, e
        ))
    })?;
    validate_config(&config).map_err(|e| EzConsoleError::Config(e.to_string()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Write `config` to `path` with explanatory comments, overwriting any user comments.
pub fn save_config_to_path(config: &Config, path: &Path) -> Result<()> {
    validate_config(config).map_err(|e| EzConsoleError::Config(e.to_string()))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, generate_config_with_comments(config))?;
    Ok(())
}

/// Config file content with explanatory comments, using the values of `config`.
pub fn generate_config_with_comments(config: &Config) -> String {
    format!(
        r#"# ezconsole configuration

# ANSI styling
# - auto: only when stdout is a terminal and NO_COLOR is unset
# - always / never
color_mode = "{}"

# Foreground colors for prompts, hints, validation errors and loading frames.
# Names: default, black, dark-blue, dark-green, dark-cyan, dark-red,
# dark-magenta, dark-yellow, gray, dark-gray, blue, green, cyan, red,
# magenta, yellow, white
[palette]
prompt = "{}"
hint = "{}"
error = "{}"
loading = "{}"

[prompt]
# Attempts before a prompt gives up (0 = keep asking)
max_attempts = {}

[loading]
# Frames per second of timed animations
updates_per_second = {}
# Width of the dot suffix
dots = {}

[logging]
# off, error, warn, info, debug, trace (RUST_LOG takes precedence)
level = "{}"
"#,
        config.color_mode,
        config.palette.prompt,
        config.palette.hint,
        config.palette.error,
        config.palette.loading,
        config.prompt.max_attempts,
        config.loading.updates_per_second,
        config.loading.dots,
        config.logging.level,
    )
}
