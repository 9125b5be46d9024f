//! Short URL creation

use tracing::debug;

use super::models::{ShortenRequest, decode_shorten_result};
use super::transport::{HttpMethod, Transport};
use super::ShlinkClient;
use crate::errors::{Result, ShrtError};

impl<T: Transport> ShlinkClient<T> {
    /// Shorten `long_url`, reusing an existing short URL when the service has one.
    ///
    /// One attempt per call. An empty or missing slug lets the service choose.
    pub fn shorten_url(&self, long_url: &str, custom_slug: Option<&str>) -> Result<String> {
        if long_url.trim().is_empty() {
            return Err(ShrtError::validation("long URL cannot be empty"));
        }

        let request = ShortenRequest::new(long_url, custom_slug);
        let payload = serde_json::to_vec(&request)
            .map_err(|e| ShrtError::validation(format!("cannot encode request: {}", e)))?;

        let url = self.short_urls_endpoint();
        let response = self.transport.request(
            HttpMethod::Post,
            &url,
            &self.api_key,
            self.timeout,
            Some(&payload),
        )?;
        debug!("Shortened {} in {:?}", long_url, response.elapsed);

        let result = decode_shorten_result(&response.body)?;
        result
            .short_url
            .ok_or_else(|| ShrtError::decode("response does not contain a shortUrl"))
    }
}
