//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for shrt using clap's derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::system::logging::LogFormat;

/// shrt - list and create short URLs on a Shlink instance
#[derive(Parser, Debug)]
#[command(name = "shrt")]
#[command(version)]
#[command(
    about = "An alternative Shlink client to shorten URLs",
    long_about = "Interact with a Shlink instance from the terminal without installing the official client."
)]
pub struct Cli {
    /// Config file (default: ~/.shrt.yaml, ~/.shrt.toml, ...)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress progress notices
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Log format: text or json
    #[arg(long, global = true, default_value = "text")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List the short URLs of the configured Shlink instance (first page)
    List,

    /// Shorten one or more long URLs
    ///
    /// A single URL is also copied to the clipboard.
    Short {
        /// Long URLs to shorten, processed in order
        urls: Vec<String>,

        /// Custom slug for the short URL (single URL only)
        #[arg(long, short = 'g')]
        slug: Option<String>,

        /// Do not copy the result to the clipboard
        #[arg(long)]
        no_copy: bool,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate an example configuration file
    Generate {
        /// Output path (default: ~/.shrt.toml)
        output_path: Option<PathBuf>,

        /// Force overwrite of an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the resolved configuration (API key masked)
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_with_slug() {
        let cli = Cli::parse_from(["shrt", "short", "-g", "docs", "https://example.com"]);
        assert_eq!(
            cli.command,
            Commands::Short {
                urls: vec!["https://example.com".to_string()],
                slug: Some("docs".to_string()),
                no_copy: false,
            }
        );
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_short_without_urls() {
        let cli = Cli::parse_from(["shrt", "short"]);
        assert!(matches!(cli.command, Commands::Short { ref urls, .. } if urls.is_empty()));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["shrt", "list", "-q", "--config", "/tmp/shrt.yaml"]);
        assert_eq!(cli.command, Commands::List);
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/shrt.yaml")));
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
