use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};
use validator::{Validate, ValidationError};

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const CONFIG_DIR: &str = "config";
const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 1024;
const DEFAULT_AUTO_ASSIGN_DELAY_MS: u64 = 2000;
const DEFAULT_LOW_STOCK_ALERT_LIMIT: usize = 5;
const DEFAULT_WAREHOUSE_ID: &str = "WH-001";

/// Application configuration structure with validation
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Deployment profile, e.g. `development` or `production`
    #[serde(default = "default_environment")]
    pub environment: String,

    #[serde(default = "default_log_level")]
    #[validate(custom = "validate_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub log_json: bool,

    /// Capacity of the notification event channel
    #[serde(default = "default_event_channel_capacity")]
    #[validate(custom = "validate_event_channel_capacity")]
    pub event_channel_capacity: usize,

    /// Simulated optimisation time before auto-assign completes
    #[serde(default = "default_auto_assign_delay_ms")]
    #[validate(range(max = 60000))]
    pub auto_assign_delay_ms: u64,

    /// Maximum number of items on the low-stock alert panel
    #[serde(default = "default_low_stock_alert_limit")]
    #[validate(range(min = 1))]
    pub low_stock_alert_limit: usize,

    /// Warehouse whose inventory page opens by default
    #[serde(default = "default_warehouse_id")]
    #[validate(length(min = 1))]
    pub default_warehouse_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            log_level: default_log_level(),
            log_json: false,
            event_channel_capacity: default_event_channel_capacity(),
            auto_assign_delay_ms: default_auto_assign_delay_ms(),
            low_stock_alert_limit: default_low_stock_alert_limit(),
            default_warehouse_id: default_warehouse_id(),
        }
    }
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn auto_assign_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.auto_assign_delay_ms)
    }
}

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Default value functions
fn default_environment() -> String {
    DEFAULT_ENV.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_event_channel_capacity() -> usize {
    DEFAULT_EVENT_CHANNEL_CAPACITY
}

fn default_auto_assign_delay_ms() -> u64 {
    DEFAULT_AUTO_ASSIGN_DELAY_MS
}

fn default_low_stock_alert_limit() -> usize {
    DEFAULT_LOW_STOCK_ALERT_LIMIT
}

fn default_warehouse_id() -> String {
    DEFAULT_WAREHOUSE_ID.to_string()
}

/// Validates log level values
fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if valid_levels.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("log_level");
        err.message = Some("Must be one of: trace, debug, info, warn, error".into());
        Err(err)
    }
}

fn validate_event_channel_capacity(capacity: usize) -> Result<(), ValidationError> {
    if capacity == 0 {
        let mut err = ValidationError::new("event_channel_capacity");
        err.message = Some("event_channel_capacity must be greater than 0".into());
        return Err(err);
    }
    Ok(())
}

/// Initializes tracing using the provided log level as the default filter.
/// `RUST_LOG`, when set, takes precedence.
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_directive = format!("transport_hub={level},hub_cli={level}", level = level);
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    let filter = EnvFilter::new(filter_directive);
    if json {
        let _ = fmt().with_env_filter(filter).json().try_init();
    } else {
        let _ = fmt().with_env_filter(filter).try_init();
    }
}

/// Loads application configuration
///
/// Layers configuration sources in this order:
/// 1. Built-in defaults
/// 2. Default config (config/default.toml)
/// 3. Environment-specific config (config/{env}.toml)
/// 4. Environment variables (APP__*)
pub fn load_config() -> Result<AppConfig, AppConfigError> {
    // Support both RUN_ENV and APP_ENV for selecting config profile
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());
    load_config_from(Path::new(CONFIG_DIR), &run_env)
}

/// Same layering as [`load_config`], reading files from `config_dir` and
/// using `run_env` as the profile name.
pub fn load_config_from(config_dir: &Path, run_env: &str) -> Result<AppConfig, AppConfigError> {
    info!("Loading configuration for environment: {}", run_env);

    if !config_dir.exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            config_dir.display()
        );
    }

    let config = Config::builder()
        .set_default("environment", run_env)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .set_default("event_channel_capacity", DEFAULT_EVENT_CHANNEL_CAPACITY as i64)?
        .set_default("auto_assign_delay_ms", DEFAULT_AUTO_ASSIGN_DELAY_MS as i64)?
        .set_default("low_stock_alert_limit", DEFAULT_LOW_STOCK_ALERT_LIMIT as i64)?
        .set_default("default_warehouse_id", DEFAULT_WAREHOUSE_ID)?
        .add_source(File::from(config_dir.join("default.toml")).required(false))
        .add_source(File::from(config_dir.join(format!("{}.toml", run_env))).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate().map_err(|e| {
        error!("Configuration validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    info!("Configuration loaded successfully");
    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::TempDir;

    fn config_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn defaults_are_valid() {
        let cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.auto_assign_delay_ms, 2000);
        assert_eq!(cfg.low_stock_alert_limit, 5);
        assert_eq!(cfg.default_warehouse_id, "WH-001");
    }

    #[test]
    fn missing_directory_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = load_config_from(&dir.path().join("absent"), "staging").unwrap();
        assert_eq!(cfg.environment, "staging");
        assert_eq!(cfg.event_channel_capacity, 1024);
        assert!(!cfg.is_production());
    }

    #[test]
    fn profile_file_overrides_default_file() {
        let dir = config_dir(&[
            ("default.toml", "log_level = \"debug\"\nauto_assign_delay_ms = 500\n"),
            ("production.toml", "environment = \"production\"\nauto_assign_delay_ms = 0\n"),
        ]);
        let cfg = load_config_from(dir.path(), "production").unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.auto_assign_delay_ms, 0);
        assert!(cfg.is_production());
    }

    #[test]
    fn invalid_values_fail_validation() {
        let dir = config_dir(&[(
            "default.toml",
            "log_level = \"loud\"\nlow_stock_alert_limit = 0\nauto_assign_delay_ms = 90000\n",
        )]);
        let result = load_config_from(dir.path(), "development");
        assert_matches!(result, Err(AppConfigError::Validation(_)));
        if let Err(AppConfigError::Validation(errors)) = result {
            let fields = errors.field_errors();
            assert!(fields.contains_key("log_level"));
            assert!(fields.contains_key("low_stock_alert_limit"));
            assert!(fields.contains_key("auto_assign_delay_ms"));
        }
    }

    #[test]
    fn zero_event_channel_capacity_is_rejected() {
        let cfg = AppConfig {
            event_channel_capacity: 0,
            ..AppConfig::default()
        };
        let errors = cfg.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("event_channel_capacity"));

        let dir = config_dir(&[("default.toml", "event_channel_capacity = 0\n")]);
        assert_matches!(
            load_config_from(dir.path(), "development"),
            Err(AppConfigError::Validation(_))
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = config_dir(&[("default.toml", "database_url = \"postgres://x\"\n")]);
        assert_matches!(
            load_config_from(dir.path(), "development"),
            Err(AppConfigError::Load(_))
        );
    }
}
