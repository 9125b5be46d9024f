//! Shlink REST client
//!
//! # Architecture
//!
//! ```text
//! Command → ShlinkClient ──→ list_short_urls  ─┐
//!                        └─→ shorten_url      ─┴→ Transport (HTTP) → models (decode)
//! ```
//!
//! The client holds only the resolved configuration and a transport. Each call
//! is an independent request/response round trip.

pub mod models;
pub mod transport;

mod list;
mod shorten;

pub use list::{ShortUrlRow, display_long_url};
pub use models::{
    ApiErrorDetail, Pagination, ShortUrlPage, ShortUrlRecord, ShortenRequest, ShortenResult,
    VisitsSummary, decode_page, decode_shorten_result,
};
pub use transport::{HttpMethod, RestResponse, Transport, UreqTransport, classify_response};

use std::time::Duration;

use crate::config::ShlinkConfig;

const SHORT_URLS_PATH: &str = "/rest/v2/short-urls";

/// Client for one Shlink instance
pub struct ShlinkClient<T: Transport> {
    transport: T,
    host: String,
    api_key: String,
    timeout: Duration,
}

impl<T: Transport> ShlinkClient<T> {
    pub fn new(transport: T, config: &ShlinkConfig) -> Self {
        Self {
            transport,
            host: config.shlink_url.clone(),
            api_key: config.api_key.clone(),
            timeout: config.timeout,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn short_urls_endpoint(&self) -> String {
        format!("{}{}", self.host.trim_end_matches('/'), SHORT_URLS_PATH)
    }
}

impl ShlinkClient<UreqTransport> {
    /// Client over the default HTTP transport
    pub fn from_config(config: &ShlinkConfig) -> Self {
        Self::new(UreqTransport::new(), config)
    }
}
