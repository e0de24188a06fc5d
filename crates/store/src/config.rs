//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SAFFRON_DATA_DIR` - Snapshot directory (default: .saffron)
//! - `SAFFRON_FREE_SHIPPING_THRESHOLD` - Subtotal that ships free (default: 100.00)
//! - `SAFFRON_SHIPPING_FEE` - Flat fee below the threshold (default: 9.99)
//! - `SAFFRON_CHECKOUT_DELAY_MS` - Simulated payment processing time (default: 2000)
//! - `SAFFRON_REPLY_DELAY_MS` - Support chat typing time (default: 1000)
//! - `SAFFRON_ADMIN_USERNAME` - Back-office username (default: admin)
//! - `SAFFRON_ADMIN_PASSWORD` - Back-office password (default: admin@123)

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use saffron_core::Price;
use secrecy::SecretString;
use thiserror::Error;

use crate::auth::AdminCredentials;
use crate::checkout::ShippingPolicy;

const DEFAULT_DATA_DIR: &str = ".saffron";
const DEFAULT_CHECKOUT_DELAY_MS: u64 = 2000;
const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing value for environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding one JSON snapshot per table
    pub data_dir: PathBuf,
    /// Shipping surcharge rule applied at checkout
    pub shipping: ShippingPolicy,
    /// How long the CLI pretends to process a payment
    pub checkout_delay: Duration,
    /// How long the support chat "types" before replying
    pub reply_delay: Duration,
    /// Back-office login pair
    pub admin: AdminCredentials,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            shipping: ShippingPolicy::default(),
            checkout_delay: Duration::from_millis(DEFAULT_CHECKOUT_DELAY_MS),
            reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS),
            admin: AdminCredentials::default(),
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

    /// Load configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);
        let defaults = Self::default();

        let data_dir = env
            .optional("SAFFRON_DATA_DIR")
            .map_or(defaults.data_dir, PathBuf::from);

        let shipping = ShippingPolicy {
            free_threshold: env
                .parsed::<Price>("SAFFRON_FREE_SHIPPING_THRESHOLD")?
                .unwrap_or(defaults.shipping.free_threshold),
            flat_fee: env
                .parsed::<Price>("SAFFRON_SHIPPING_FEE")?
                .unwrap_or(defaults.shipping.flat_fee),
        };
        for (key, price) in [
            ("SAFFRON_FREE_SHIPPING_THRESHOLD", shipping.free_threshold),
            ("SAFFRON_SHIPPING_FEE", shipping.flat_fee),
        ] {
            if price.is_negative() {
                return Err(ConfigError::InvalidEnvVar(
                    key.to_string(),
                    "must not be negative".to_string(),
                ));
            }
        }

        let checkout_delay = env
            .parsed::<u64>("SAFFRON_CHECKOUT_DELAY_MS")?
            .map_or(defaults.checkout_delay, Duration::from_millis);
        let reply_delay = env
            .parsed::<u64>("SAFFRON_REPLY_DELAY_MS")?
            .map_or(defaults.reply_delay, Duration::from_millis);

        let admin = AdminCredentials {
            username: env
                .non_empty("SAFFRON_ADMIN_USERNAME")?
                .unwrap_or(defaults.admin.username),
            password: match env.non_empty("SAFFRON_ADMIN_PASSWORD")? {
                Some(password) => SecretString::from(password),
                None => defaults.admin.password,
            },
        };

        Ok(Self {
            data_dir,
            shipping,
            checkout_delay,
            reply_delay,
            admin,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

struct Env<F>(F);

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Get an optional variable. Blank values count as unset.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.trim().is_empty())
    }

    /// Get a variable that may be unset but must not be blank when present.
    fn non_empty(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match (self.0)(key) {
            Some(value) if value.trim().is_empty() => {
                Err(ConfigError::MissingEnvVar(key.to_string()))
            }
            other => Ok(other),
        }
    }

    /// Get an optional variable parsed as `T`.
    fn parsed<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.optional(key)
            .map(|value| {
                value
                    .trim()
                    .parse::<T>()
                    .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
            })
            .transpose()
    }
}
