//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `AURA_MAX_CART_QUANTITY` - Largest quantity per cart line (default: 99, min 1)
//! - `AURA_PLACING_DELAY_MS` - Simulated order placement time (default: 1500)
//! - `AURA_SPLASH_DELAY_MS` - Pause before the first screen (default: 0)
//! - `AURA_SEED_SAMPLE_DATA` - Seed profile, wishlist and order history (default: true)

use std::time::Duration;

use thiserror::Error;

use crate::cart::DEFAULT_MAX_QUANTITY;

const DEFAULT_PLACING_DELAY_MS: u64 = 1500;
const DEFAULT_SPLASH_DELAY_MS: u64 = 0;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Quantity ceiling for a single cart line
    pub max_cart_quantity: u32,
    /// How long the simulated "placing order" step takes
    pub placing_delay: Duration,
    /// How long the splash screen stays up
    pub splash_delay: Duration,
    /// Whether to start with the sample profile, wishlist and orders
    pub seed_sample_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_cart_quantity: DEFAULT_MAX_QUANTITY,
            placing_delay: Duration::from_millis(DEFAULT_PLACING_DELAY_MS),
            splash_delay: Duration::from_millis(DEFAULT_SPLASH_DELAY_MS),
            seed_sample_data: true,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a present value cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let max_cart_quantity =
            parse_or_default(&lookup, "AURA_MAX_CART_QUANTITY", DEFAULT_MAX_QUANTITY)?;
        if max_cart_quantity == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "AURA_MAX_CART_QUANTITY".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        let placing_delay_ms =
            parse_or_default(&lookup, "AURA_PLACING_DELAY_MS", DEFAULT_PLACING_DELAY_MS)?;
        let splash_delay_ms =
            parse_or_default(&lookup, "AURA_SPLASH_DELAY_MS", DEFAULT_SPLASH_DELAY_MS)?;
        let seed_sample_data = match lookup("AURA_SEED_SAMPLE_DATA") {
            Some(value) => parse_bool("AURA_SEED_SAMPLE_DATA", &value)?,
            None => true,
        };

        Ok(Self {
            max_cart_quantity,
            placing_delay: Duration::from_millis(placing_delay_ms),
            splash_delay: Duration::from_millis(splash_delay_ms),
            seed_sample_data,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable, falling back to `default` when it is unset or blank.
fn parse_or_default<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        _ => Ok(default),
    }
}

/// Parse a boolean flag (`true/false`, `1/0`, `yes/no`, `on/off`).
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<StoreConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StoreConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(load(&[]).unwrap(), StoreConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("AURA_MAX_CART_QUANTITY", "10"),
            ("AURA_PLACING_DELAY_MS", "0"),
            ("AURA_SPLASH_DELAY_MS", " 250 "),
            ("AURA_SEED_SAMPLE_DATA", "off"),
        ])
        .unwrap();
        assert_eq!(config.max_cart_quantity, 10);
        assert_eq!(config.placing_delay, Duration::ZERO);
        assert_eq!(config.splash_delay, Duration::from_millis(250));
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn test_blank_value_uses_default() {
        let config = load(&[("AURA_MAX_CART_QUANTITY", "  ")]).unwrap();
        assert_eq!(config.max_cart_quantity, DEFAULT_MAX_QUANTITY);
    }

    #[test]
    fn test_invalid_number() {
        let err = load(&[("AURA_PLACING_DELAY_MS", "soon")]).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "AURA_PLACING_DELAY_MS")
        );
    }

    #[test]
    fn test_zero_max_quantity_rejected() {
        assert!(load(&[("AURA_MAX_CART_QUANTITY", "0")]).is_err());
    }

    #[test]
    fn test_invalid_bool() {
        let err = load(&[("AURA_SEED_SAMPLE_DATA", "maybe")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid environment variable AURA_SEED_SAMPLE_DATA: expected a boolean, got 'maybe'"
        );
    }
}
