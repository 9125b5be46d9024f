//! HTTP transport for the Shlink REST API
//!
//! One authenticated request per call, no retries. Status handling:
//! - 2xx: body returned
//! - 401 / 500: classified without reading the body
//! - 400: body text becomes the error detail
//! - anything else: `UnexpectedStatus` with the body text

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};
use ureq::Agent;

use crate::errors::{Result, ShrtError};

pub const API_KEY_HEADER: &str = "X-Api-Key";
const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// Successful round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestResponse {
    pub body: Vec<u8>,
    /// Wall-clock time from request start until the body was fully read
    pub elapsed: Duration,
}

/// A single authenticated request against the service.
pub trait Transport {
    fn request(
        &self,
        method: HttpMethod,
        url: &str,
        api_key: &str,
        timeout: Duration,
        body: Option<&[u8]>,
    ) -> Result<RestResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn request(
        &self,
        method: HttpMethod,
        url: &str,
        api_key: &str,
        timeout: Duration,
        body: Option<&[u8]>,
    ) -> Result<RestResponse> {
        (**self).request(method, url, api_key, timeout, body)
    }
}

/// Map a response status to a body or a classified error.
///
/// `read_body` is only invoked for statuses whose body is needed.
pub fn classify_response<F>(status: u16, read_body: F) -> Result<Vec<u8>>
where
    F: FnOnce() -> Result<Vec<u8>>,
{
    match status {
        200..=299 => read_body(),
        401 => Err(ShrtError::authentication("Unauthorized")),
        500 => Err(ShrtError::server("Internal Server Error")),
        400 => {
            let body = read_body()?;
            Err(ShrtError::request(String::from_utf8_lossy(&body)))
        }
        other => {
            let detail = match read_body() {
                Ok(body) => String::from_utf8_lossy(&body).into_owned(),
                Err(e) => {
                    warn!("Failed to read body of HTTP {} response: {}", other, e);
                    String::new()
                }
            };
            Err(ShrtError::unexpected_status(other, detail))
        }
    }
}

/// Blocking transport backed by ureq
#[derive(Debug, Clone, Copy, Default)]
pub struct UreqTransport;

impl UreqTransport {
    pub fn new() -> Self {
        Self
    }

    fn agent(timeout: Duration) -> Agent {
        Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into()
    }
}

impl Transport for UreqTransport {
    fn request(
        &self,
        method: HttpMethod,
        url: &str,
        api_key: &str,
        timeout: Duration,
        body: Option<&[u8]>,
    ) -> Result<RestResponse> {
        let start = Instant::now();
        let agent = Self::agent(timeout);
        debug!("{} {}", method, url);

        let response = match method {
            HttpMethod::Get => {
                if body.is_some() {
                    warn!("Ignoring request body on GET {}", url);
                }
                agent
                    .get(url)
                    .header(API_KEY_HEADER, api_key)
                    .header("Accept", JSON_CONTENT_TYPE)
                    .call()
            }
            HttpMethod::Post => {
                let request = agent
                    .post(url)
                    .header(API_KEY_HEADER, api_key)
                    .header("Accept", JSON_CONTENT_TYPE);
                match body {
                    Some(payload) => {
                        trace!("Sending {} byte payload", payload.len());
                        request
                            .header("Content-Type", JSON_CONTENT_TYPE)
                            .send(payload)
                    }
                    None => request.send_empty(),
                }
            }
        };
        let mut response = response?;

        let status = response.status().as_u16();
        // The body reader is dropped on every return path, releasing the connection.
        let body = classify_response(status, || {
            response
                .body_mut()
                .read_to_vec()
                .map_err(ShrtError::from)
        })?;

        let elapsed = start.elapsed();
        debug!(
            "{} {} -> {} ({} bytes in {:?})",
            method,
            url,
            status,
            body.len(),
            elapsed
        );
        Ok(RestResponse { body, elapsed })
    }
}
