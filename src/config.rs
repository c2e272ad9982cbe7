//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use chrono::Duration;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::clock::{millis, MAX_DELAY_MS};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,

    #[serde(default)]
    pub wallet: WalletConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Timings and odds of the simulated back end
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SimulationConfig {
    /// Delay between selecting a file and verification starting
    #[serde(default)]
    pub pickup_delay_ms: u64,

    #[serde(default = "default_verification_delay")]
    pub verification_delay_ms: u64,

    #[serde(default = "default_reply_delay")]
    pub reply_delay_ms: u64,

    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,

    /// Probability in `0.0..=1.0` that a verification is rejected
    #[serde(default)]
    pub failure_rate: f64,

    #[serde(default = "default_min_credits")]
    pub min_credits: u32,

    #[serde(default = "default_max_credits")]
    pub max_credits: u32,

    /// Fixed RNG seed for reproducible runs
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_verification_delay() -> u64 {
    3000
}

fn default_reply_delay() -> u64 {
    1500
}

fn default_max_file_size() -> u64 {
    10 * 1024 * 1024 // 10 MB
}

fn default_min_credits() -> u32 {
    100
}

fn default_max_credits() -> u32 {
    1099
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            pickup_delay_ms: 0,
            verification_delay_ms: default_verification_delay(),
            reply_delay_ms: default_reply_delay(),
            max_file_size_bytes: default_max_file_size(),
            failure_rate: 0.0,
            min_credits: default_min_credits(),
            max_credits: default_max_credits(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn pickup_delay(&self) -> Duration {
        millis(self.pickup_delay_ms)
    }

    pub fn verification_delay(&self) -> Duration {
        millis(self.verification_delay_ms)
    }

    pub fn reply_delay(&self) -> Duration {
        millis(self.reply_delay_ms)
    }

    /// Inclusive credit range, swapped if configured backwards
    pub fn credit_range(&self) -> (u32, u32) {
        if self.min_credits <= self.max_credits {
            (self.min_credits, self.max_credits)
        } else {
            (self.max_credits, self.min_credits)
        }
    }
}

/// Demo wallet identity
#[derive(Debug, Clone, Deserialize)]
pub struct WalletConfig {
    #[serde(default = "default_wallet_address")]
    pub address: String,
}

fn default_wallet_address() -> String {
    "0x742d35Cc4Ca0bC90A8".to_string()
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            address: default_wallet_address(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        let config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("carboncredx").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    fn validate(&self) -> Result<(), String> {
        let rate = self.simulation.failure_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(format!("failure_rate must be between 0 and 1, got {}", rate));
        }

        let sim = &self.simulation;
        for (key, ms) in [
            ("pickup_delay_ms", sim.pickup_delay_ms),
            ("verification_delay_ms", sim.verification_delay_ms),
            ("reply_delay_ms", sim.reply_delay_ms),
        ] {
            if ms > MAX_DELAY_MS {
                return Err(format!("{} must be at most {}, got {}", key, MAX_DELAY_MS, ms));
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Some(ms) = env_delay("CARBONCREDX_PICKUP_DELAY_MS") {
            self.simulation.pickup_delay_ms = ms;
        }
        if let Some(ms) = env_delay("CARBONCREDX_VERIFICATION_DELAY_MS") {
            self.simulation.verification_delay_ms = ms;
        }
        if let Some(ms) = env_delay("CARBONCREDX_REPLY_DELAY_MS") {
            self.simulation.reply_delay_ms = ms;
        }
        if let Some(bytes) = env_parse("CARBONCREDX_MAX_FILE_SIZE_BYTES") {
            self.simulation.max_file_size_bytes = bytes;
        }
        if let Some(rate) = env_parse::<f64>("CARBONCREDX_FAILURE_RATE") {
            if (0.0..=1.0).contains(&rate) {
                self.simulation.failure_rate = rate;
            }
        }
        if let Some(credits) = env_parse("CARBONCREDX_MIN_CREDITS") {
            self.simulation.min_credits = credits;
        }
        if let Some(credits) = env_parse("CARBONCREDX_MAX_CREDITS") {
            self.simulation.max_credits = credits;
        }
        if let Some(seed) = env_parse("CARBONCREDX_SEED") {
            self.simulation.seed = Some(seed);
        }

        if let Ok(address) = std::env::var("CARBONCREDX_WALLET_ADDRESS") {
            self.wallet.address = address;
        }

        if let Ok(level) = std::env::var("CARBONCREDX_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("CARBONCREDX_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Delay override; values past [`MAX_DELAY_MS`] are ignored
fn env_delay(key: &str) -> Option<u64> {
    env_parse(key).filter(|ms| *ms <= MAX_DELAY_MS)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# CarbonCredX Configuration
#
# Environment variables override these settings:
# - CARBONCREDX_PICKUP_DELAY_MS
# - CARBONCREDX_VERIFICATION_DELAY_MS
# - CARBONCREDX_REPLY_DELAY_MS
# - CARBONCREDX_MAX_FILE_SIZE_BYTES
# - CARBONCREDX_FAILURE_RATE
# - CARBONCREDX_MIN_CREDITS
# - CARBONCREDX_MAX_CREDITS
# - CARBONCREDX_SEED
# - CARBONCREDX_WALLET_ADDRESS
# - CARBONCREDX_LOG_LEVEL
# - CARBONCREDX_LOG_FORMAT

[simulation]
# Delay before an uploaded document enters processing (ms)
pickup_delay_ms = 0

# Time a document spends in processing (ms)
verification_delay_ms = 3000

# Assistant typing delay (ms)
reply_delay_ms = 1500

# Largest accepted upload (bytes)
max_file_size_bytes = 10485760

# Probability that a verification is rejected (0.0 - 1.0)
failure_rate = 0.0

# Credits attached to a verified document (inclusive)
min_credits = 100
max_credits = 1099

# Fixed seed for reproducible runs
# seed = 42

[wallet]
# Address shown on the wallet page
address = "0x742d35Cc4Ca0bC90A8"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_round_trips() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.simulation, SimulationConfig::default());
        assert_eq!(config.wallet.address, "0x742d35Cc4Ca0bC90A8");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::parse("[simulation]\nreply_delay_ms = 10\n").unwrap();
        assert_eq!(config.simulation.reply_delay_ms, 10);
        assert_eq!(config.simulation.verification_delay_ms, 3000);
        assert_eq!(config.simulation.credit_range(), (100, 1099));
    }

    #[test]
    fn test_rejects_bad_failure_rate() {
        let err = Config::parse("[simulation]\nfailure_rate = 1.5\n").unwrap_err();
        assert!(err.contains("failure_rate"));
    }

    #[test]
    fn test_rejects_overlong_delays() {
        let err = Config::parse("[simulation]\nverification_delay_ms = 9223372036854775807\n")
            .unwrap_err();
        assert!(err.contains("verification_delay_ms"));

        let err = Config::parse("[simulation]\nreply_delay_ms = 86400001\n").unwrap_err();
        assert!(err.contains("reply_delay_ms"));

        let config = Config::parse("[simulation]\npickup_delay_ms = 86400000\n").unwrap();
        assert_eq!(config.simulation.pickup_delay(), Duration::days(1));
    }

    #[test]
    fn test_env_delay_ignores_overlong_values() {
        std::env::set_var("CARBONCREDX_TEST_DELAY_OK", "250");
        std::env::set_var("CARBONCREDX_TEST_DELAY_HUGE", "9223372036854775807");

        assert_eq!(env_delay("CARBONCREDX_TEST_DELAY_OK"), Some(250));
        assert_eq!(env_delay("CARBONCREDX_TEST_DELAY_HUGE"), None);
        assert_eq!(env_delay("CARBONCREDX_TEST_DELAY_UNSET"), None);
    }

    #[test]
    fn test_env_overrides_cover_simulation_settings() {
        std::env::set_var("CARBONCREDX_PICKUP_DELAY_MS", "40");
        std::env::set_var("CARBONCREDX_MAX_FILE_SIZE_BYTES", "2048");
        std::env::set_var("CARBONCREDX_MIN_CREDITS", "5");
        std::env::set_var("CARBONCREDX_MAX_CREDITS", "9");

        let config = Config::from_env();

        for key in [
            "CARBONCREDX_PICKUP_DELAY_MS",
            "CARBONCREDX_MAX_FILE_SIZE_BYTES",
            "CARBONCREDX_MIN_CREDITS",
            "CARBONCREDX_MAX_CREDITS",
        ] {
            std::env::remove_var(key);
        }

        assert_eq!(config.simulation.pickup_delay_ms, 40);
        assert_eq!(config.simulation.max_file_size_bytes, 2048);
        assert_eq!(config.simulation.credit_range(), (5, 9));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[wallet]\naddress = \"0xabc\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.wallet.address, "0xabc");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/carboncredx.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_credit_range_swaps() {
        let sim = SimulationConfig {
            min_credits: 500,
            max_credits: 100,
            ..SimulationConfig::default()
        };
        assert_eq!(sim.credit_range(), (100, 500));
    }
}
