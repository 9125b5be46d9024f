//! Configuration file commands

use std::io::Write;
use std::path::PathBuf;

use colored::Colorize;

use crate::config::{
    ConfigLoader, ConfigProvider, DEFAULT_SHLINK_URL, DEFAULT_TIMEOUT_SECS, default_sample_path,
    keys, mask_secret, write_sample_config,
};
use crate::errors::{Result, ShrtError};

/// Write an example config file
pub fn config_generate<W: Write + ?Sized>(
    output_path: Option<PathBuf>,
    force: bool,
    out: &mut W,
) -> Result<()> {
    let path = match output_path {
        Some(path) => path,
        None => default_sample_path().ok_or_else(|| {
            ShrtError::configuration("cannot determine home directory, pass an output path")
        })?,
    };

    write_sample_config(&path, force)?;
    writeln!(
        out,
        "{} Sample configuration written to {}",
        "✓".bold().green(),
        path.display().to_string().cyan()
    )?;
    Ok(())
}

/// Print the effective settings. Works without an API key.
pub fn config_show<W: Write + ?Sized>(loader: &ConfigLoader, out: &mut W) -> Result<()> {
    let settings = loader.load()?;

    let shlink_url = ConfigProvider::get_string(&settings, keys::SHLINK_URL)?
        .unwrap_or_else(|| DEFAULT_SHLINK_URL.to_string());
    let timeout = ConfigProvider::get_int(&settings, keys::TIMEOUT)?
        .unwrap_or(DEFAULT_TIMEOUT_SECS as i64);
    let api_key = ConfigProvider::get_string(&settings, keys::API_KEY)?
        .filter(|key| !key.trim().is_empty())
        .map(|key| mask_secret(key.trim()))
        .unwrap_or_else(|| "(not set)".red().to_string());

    writeln!(out, "{} {}", "shlink_url:".bold(), shlink_url)?;
    writeln!(out, "{} {}", "api_key:".bold(), api_key)?;
    writeln!(out, "{} {}s", "timeout:".bold(), timeout)?;
    Ok(())
}
