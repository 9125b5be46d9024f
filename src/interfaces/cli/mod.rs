//! CLI interface module
//!
//! Resolves configuration, builds the client and dispatches to the commands.
//! Commands write to an injected writer; the binary passes stdout.

pub mod clipboard;
pub mod commands;
pub mod table;

use std::io::{self, Write};

use tracing::debug;

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::client::{ShlinkClient, Transport, UreqTransport};
use crate::config::{ConfigLoader, ShlinkConfig};
use crate::errors::Result;
use clipboard::{ClipboardSink, SystemClipboard};
use commands::{ShortOptions, config_generate, config_show, list_short_urls, shorten_urls};

/// Run a clap-parsed invocation against the real network, clipboard and stdout.
pub fn run_cli(cli: Cli) -> Result<()> {
    let loader = ConfigLoader::new(cli.config.clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut clipboard = SystemClipboard;

    run_cli_command(
        cli.command,
        cli.quiet,
        &loader,
        UreqTransport::new(),
        &mut clipboard,
        &mut out,
    )
}

/// Run one command with explicit collaborators.
///
/// API commands resolve the configuration before any request is made, so a
/// missing API key fails without touching the network.
pub fn run_cli_command<T, C, W>(
    command: Commands,
    quiet: bool,
    loader: &ConfigLoader,
    transport: T,
    clipboard: &mut C,
    out: &mut W,
) -> Result<()>
where
    T: Transport,
    C: ClipboardSink + ?Sized,
    W: Write + ?Sized,
{
    match command {
        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => {
                config_generate(output_path, force, out)
            }
            ConfigCommands::Show => config_show(loader, out),
        },

        Commands::List => {
            let client = connect(loader, transport)?;
            list_short_urls(&client, quiet, out)
        }

        Commands::Short {
            urls,
            slug,
            no_copy,
        } => {
            let client = connect(loader, transport)?;
            let options = ShortOptions {
                slug: slug.as_deref(),
                copy: !no_copy,
                quiet,
            };
            shorten_urls(&client, &urls, &options, clipboard, out).map(|_| ())
        }
    }
}

/// Resolve the configuration and build a client over `transport`.
fn connect<T: Transport>(loader: &ConfigLoader, transport: T) -> Result<ShlinkClient<T>> {
    let config = ShlinkConfig::load(loader)?;
    debug!(
        "Using Shlink instance {} (timeout {:?})",
        config.shlink_url, config.timeout
    );
    Ok(ShlinkClient::new(transport, &config))
}
