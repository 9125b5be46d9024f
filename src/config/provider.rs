//! Key/value access to layered configuration

use std::collections::HashMap;

use crate::errors::{Result, ShrtError};

/// Read-only configuration lookups.
///
/// `Ok(None)` means the key is not set anywhere.
pub trait ConfigProvider {
    fn get_string(&self, key: &str) -> Result<Option<String>>;
    fn get_int(&self, key: &str) -> Result<Option<i64>>;
}

fn not_found_as_none<T>(value: std::result::Result<T, config::ConfigError>) -> Result<Option<T>> {
    match value {
        Ok(v) => Ok(Some(v)),
        Err(config::ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl ConfigProvider for config::Config {
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        not_found_as_none(config::Config::get_string(self, key))
    }

    fn get_int(&self, key: &str) -> Result<Option<i64>> {
        not_found_as_none(config::Config::get_int(self, key))
    }
}

impl ConfigProvider for HashMap<String, String> {
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key).cloned())
    }

    fn get_int(&self, key: &str) -> Result<Option<i64>> {
        self.get(key)
            .map(|raw| {
                raw.trim().parse::<i64>().map_err(|e| {
                    ShrtError::configuration(format!("invalid integer for {}: {} ({})", key, raw, e))
                })
            })
            .transpose()
    }
}
