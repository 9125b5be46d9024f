//! Shorten URLs command

use std::io::Write;

use colored::Colorize;
use tracing::warn;

use crate::client::{ShlinkClient, Transport};
use crate::errors::{Result, ShrtError};
use crate::interfaces::cli::clipboard::ClipboardSink;
use crate::utils::url_validator::validate_url;

/// Options of one `short` invocation
#[derive(Debug, Clone, Default)]
pub struct ShortOptions<'a> {
    pub slug: Option<&'a str>,
    pub copy: bool,
    pub quiet: bool,
}

/// Shorten `urls` one after another and print each result.
///
/// The clipboard is only touched when exactly one URL was given.
pub fn shorten_urls<T, C, W>(
    client: &ShlinkClient<T>,
    urls: &[String],
    options: &ShortOptions<'_>,
    clipboard: &mut C,
    out: &mut W,
) -> Result<Vec<String>>
where
    T: Transport,
    C: ClipboardSink + ?Sized,
    W: Write + ?Sized,
{
    if urls.is_empty() {
        writeln!(out, "{} No URLs to shorten were provided", "ℹ".bold().blue())?;
        return Ok(Vec::new());
    }

    let slug = options.slug.map(str::trim).filter(|s| !s.is_empty());
    if slug.is_some() && urls.len() > 1 {
        return Err(ShrtError::validation(
            "a custom slug can only be used when shortening a single URL",
        ));
    }

    for long_url in urls {
        validate_url(long_url)?;
    }

    let copy_to_clipboard = options.copy && urls.len() == 1;
    let mut shortened = Vec::with_capacity(urls.len());

    for long_url in urls {
        if !options.quiet {
            writeln!(out, "Shortening {}", long_url)?;
        }

        let short_url = client.shorten_url(long_url.trim(), slug)?;
        writeln!(out, "{}", short_url.blue())?;

        if copy_to_clipboard {
            match clipboard.copy_text(&short_url) {
                Ok(()) if !options.quiet => {
                    writeln!(out, "{} Copied to clipboard", "✓".bold().green())?;
                }
                Ok(()) => {}
                Err(e) => {
                    warn!("Clipboard copy failed: {}", e);
                    writeln!(
                        out,
                        "{} Could not copy to clipboard: {}",
                        "⚠".bold().yellow(),
                        e.message()
                    )?;
                }
            }
        }

        shortened.push(short_url);
    }

    Ok(shortened)
}
