//! Configuration loading and validation.
//!
//! All values are read from `PASSLOCK_`-prefixed environment variables. None
//! is required; unset variables fall back to the defaults below.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::crypto::kdf::{KdfParams, SaltEncoding, DEFAULT_ITERATIONS};

/// Prefix shared by every configuration variable.
pub const ENV_PREFIX: &str = "PASSLOCK";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Validated configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// `text` or `json`.
    #[serde(default)]
    pub log_format: LogFormat,

    /// PBKDF2 iteration count. Both ends of a round trip must agree on it.
    #[serde(default = "default_kdf_iterations")]
    pub kdf_iterations: u32,

    /// `raw` or `browser_compat`.
    #[serde(default)]
    pub salt_encoding: SaltEncoding,

    /// Built from `kdf_iterations` and `salt_encoding` once they validate.
    #[serde(skip)]
    kdf_params: KdfParams,
}

fn default_log_level() -> String {
    "info".into()
}
fn default_kdf_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            kdf_iterations: default_kdf_iterations(),
            salt_encoding: SaltEncoding::default(),
            kdf_params: KdfParams::default(),
        }
    }
}

impl Config {
    /// Load and validate configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self> {
        Self::from_source(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Load from an explicit [`config::Environment`] source.
    pub fn from_source(env: config::Environment) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(env)
            .build()
            .context("failed to build configuration from environment")?;

        let mut c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        c.kdf_params = KdfParams::new(c.kdf_iterations, c.salt_encoding)
            .context("invalid PASSLOCK_KDF_ITERATIONS")?;
        Ok(c)
    }

    /// Key-derivation parameters described by this configuration.
    pub fn kdf_params(&self) -> KdfParams {
        self.kdf_params
    }

    fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            anyhow::bail!("PASSLOCK_LOG_LEVEL must not be empty");
        }
        Ok(())
    }
}
