//! List short URLs command

use std::io::Write;

use colored::Colorize;

use crate::client::{ShlinkClient, Transport};
use crate::errors::Result;
use crate::interfaces::cli::table::render_short_urls;

pub fn list_short_urls<T, W>(client: &ShlinkClient<T>, quiet: bool, out: &mut W) -> Result<()>
where
    T: Transport,
    W: Write + ?Sized,
{
    if !quiet {
        writeln!(out, "Listing URLs from {}", client.host())?;
    }

    let page = client.list_short_urls()?;

    if page.is_empty() {
        writeln!(out, "{} No short URLs found", "ℹ".bold().blue())?;
        return Ok(());
    }

    writeln!(out, "{}", render_short_urls(&page.rows()))?;

    if page.has_more_pages() {
        writeln!(
            out,
            "{} Showing {} of {} short URLs",
            "ℹ".bold().blue(),
            page.len(),
            page.pagination.total_items.to_string().green()
        )?;
    }
    Ok(())
}
