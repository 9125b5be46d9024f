//! Short URL listing

use tracing::{debug, info};

use super::models::{ShortUrlPage, ShortUrlRecord, decode_page};
use super::transport::{HttpMethod, Transport};
use super::ShlinkClient;
use crate::errors::Result;

impl<T: Transport> ShlinkClient<T> {
    /// Fetch the first page of short URLs.
    ///
    /// Later pages are never requested, whatever `pagesCount` says.
    pub fn list_short_urls(&self) -> Result<ShortUrlPage> {
        let url = self.short_urls_endpoint();
        let response =
            self.transport
                .request(HttpMethod::Get, &url, &self.api_key, self.timeout, None)?;
        debug!("Listing fetched in {:?}", response.elapsed);

        let page = decode_page(&response.body)?;
        if page.has_more_pages() {
            info!(
                "Showing page {} of {}; further pages are not fetched",
                page.pagination.current_page, page.pagination.pages_count
            );
        }
        Ok(page)
    }
}

/// Long URL without its query string
pub fn display_long_url(long_url: &str) -> &str {
    long_url.split('?').next().unwrap_or(long_url)
}

/// One table line of the listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrlRow {
    pub created: String,
    pub short_url: String,
    pub long_url: String,
    pub visits: u64,
}

impl From<&ShortUrlRecord> for ShortUrlRow {
    fn from(record: &ShortUrlRecord) -> Self {
        Self {
            created: record.date_created.format("%Y-%m-%d").to_string(),
            short_url: record.short_url.clone(),
            long_url: display_long_url(&record.long_url).to_string(),
            visits: record.visits_summary.total,
        }
    }
}

impl ShortUrlPage {
    /// Display rows in service order
    pub fn rows(&self) -> Vec<ShortUrlRow> {
        self.records.iter().map(ShortUrlRow::from).collect()
    }
}
