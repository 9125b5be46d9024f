//! Configuration loading
//!
//! Sources, lowest to highest precedence:
//! 1. built-in defaults (`shlink_url`, `timeout`)
//! 2. a config file: `--config <path>`, or `~/.shrt.{yaml,toml,json,...}`
//! 3. environment variables prefixed with `SHRT_` (e.g. `SHRT_API_KEY`)
//!
//! The result is resolved once into a [`ShlinkConfig`] and passed explicitly
//! to the client.

mod provider;
mod structs;

pub use provider::ConfigProvider;
pub use structs::{DEFAULT_SHLINK_URL, DEFAULT_TIMEOUT_SECS, FileConfig};

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use tracing::debug;

use crate::errors::{Result, ShrtError};
use crate::utils::url_validator::validate_url;

pub const ENV_PREFIX: &str = "SHRT";
const HOME_CONFIG_NAME: &str = ".shrt";

pub mod keys {
    pub const SHLINK_URL: &str = "shlink_url";
    pub const API_KEY: &str = "api_key";
    pub const TIMEOUT: &str = "timeout";
}

/// `~/.shrt` without extension; the `config` crate probes known extensions.
pub fn default_config_base() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(HOME_CONFIG_NAME))
}

/// Default target of `config generate`
pub fn default_sample_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(format!("{}.toml", HOME_CONFIG_NAME)))
}

/// Builder for the layered settings store
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_file: Option<PathBuf>,
    home_base: Option<PathBuf>,
    environment: Option<config::Map<String, String>>,
}

impl ConfigLoader {
    /// Loader for the real process: explicit file or home file, plus process env.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self {
            config_file,
            home_base: default_config_base(),
            environment: None,
        }
    }

    /// Replace the process environment with a fixed set of variables.
    pub fn with_environment(mut self, vars: config::Map<String, String>) -> Self {
        self.environment = Some(vars);
        self
    }

    /// Do not look for `~/.shrt.*`.
    pub fn without_home_file(mut self) -> Self {
        self.home_base = None;
        self
    }

    pub fn load(&self) -> Result<Config> {
        let mut builder = Config::builder()
            .set_default(keys::SHLINK_URL, DEFAULT_SHLINK_URL)?
            .set_default(keys::TIMEOUT, DEFAULT_TIMEOUT_SECS as i64)?;

        if let Some(path) = &self.config_file {
            if !path.exists() {
                return Err(ShrtError::configuration(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            debug!("Loading config from: {}", path.display());
            builder = builder.add_source(File::from(path.as_path()).required(true));
        } else if let Some(base) = &self.home_base {
            debug!("Looking for config at: {}.*", base.display());
            builder = builder.add_source(File::from(base.as_path()).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX).source(self.environment.clone()),
        );

        Ok(builder.build()?)
    }
}

/// Settings the client needs, validated at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShlinkConfig {
    pub shlink_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl ShlinkConfig {
    /// Resolve from any provider. Fails when `api_key` is missing or blank.
    pub fn resolve<P: ConfigProvider + ?Sized>(provider: &P) -> Result<Self> {
        let shlink_url = provider
            .get_string(keys::SHLINK_URL)?
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_SHLINK_URL.to_string());
        validate_url(&shlink_url).map_err(|e| {
            ShrtError::configuration(format!("invalid {}: {}", keys::SHLINK_URL, e))
        })?;

        let api_key = provider
            .get_string(keys::API_KEY)?
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ShrtError::configuration(format!(
                    "API key not set (use {} in the config file or {}_API_KEY)",
                    keys::API_KEY,
                    ENV_PREFIX
                ))
            })?;

        let timeout = provider
            .get_int(keys::TIMEOUT)?
            .unwrap_or(DEFAULT_TIMEOUT_SECS as i64);
        if timeout <= 0 {
            return Err(ShrtError::configuration(format!(
                "{} must be a positive number of seconds, got {}",
                keys::TIMEOUT,
                timeout
            )));
        }

        Ok(Self {
            shlink_url,
            api_key,
            timeout: Duration::from_secs(timeout as u64),
        })
    }

    /// Load every source and resolve.
    pub fn load(loader: &ConfigLoader) -> Result<Self> {
        Self::resolve(&loader.load()?)
    }

    /// API key with all but the first characters hidden
    pub fn display_api_key(&self) -> String {
        mask_secret(&self.api_key)
    }
}

/// Keep the first four characters of long secrets, hide the rest.
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 8 {
        return "********".to_string();
    }
    let visible: String = secret.chars().take(4).collect();
    format!("{}********", visible)
}

/// Write a sample config, refusing to overwrite unless `force` is set.
pub fn write_sample_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ShrtError::file_operation(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    FileConfig::save_sample(path)
}
