//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Denomination ladder configuration.
    pub ladder: LadderConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Denomination ladder configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LadderConfig {
    /// Tier kept between gold and copper when normalizing (e.g. "sp", "ep").
    #[serde(default = "default_middle_tier")]
    pub middle_tier: String,
    /// Whether new amounts collapse into canonical form automatically.
    #[serde(default = "default_auto_normalize")]
    pub auto_normalize: bool,
    /// Maximize every tier, platinum and electrum included.
    #[serde(default)]
    pub all_tiers: bool,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            middle_tier: default_middle_tier(),
            auto_normalize: default_auto_normalize(),
            all_tiers: false,
        }
    }
}

fn default_middle_tier() -> String {
    "sp".to_string()
}

fn default_auto_normalize() -> bool {
    true
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_log_filter() -> String {
    "coinpurse=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("COINPURSE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
