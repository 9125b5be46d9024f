//! Shlink REST payloads and their decoding
//!
//! Wire format reference: `GET/POST /rest/v2/short-urls`. Unknown fields are
//! ignored; fields the service may omit or send as `null` are `Option`s so an
//! absent value is never confused with a real empty string or zero.

use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::errors::{Result, ShrtError};

/// Visit counters of a short URL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitsSummary {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub non_bots: u64,
    #[serde(default)]
    pub bots: u64,
}

/// Per-device redirect targets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceLongUrls {
    #[serde(default)]
    pub android: Option<String>,
    #[serde(default)]
    pub ios: Option<String>,
    #[serde(default)]
    pub desktop: Option<String>,
}

/// Validity window and visit limit. `max_visits: None` means unlimited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlMeta {
    #[serde(default)]
    pub valid_since: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub valid_until: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub max_visits: Option<u64>,
}

/// One short URL as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlRecord {
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
    #[serde(default)]
    pub device_long_urls: DeviceLongUrls,
    pub date_created: DateTime<FixedOffset>,
    #[serde(default)]
    pub visits_summary: VisitsSummary,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub meta: ShortUrlMeta,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub crawlable: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u64,
    pub pages_count: u64,
    pub items_per_page: u64,
    pub items_in_current_page: u64,
    pub total_items: u64,
}

impl Pagination {
    /// Pagination for a response that did not report any: one page holding everything.
    fn single_page(count: usize) -> Self {
        let count = count as u64;
        Self {
            current_page: 1,
            pages_count: 1,
            items_per_page: count,
            items_in_current_page: count,
            total_items: count,
        }
    }
}

/// First page of the short URL listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortUrlPage {
    pub records: Vec<ShortUrlRecord>,
    pub pagination: Pagination,
}

impl ShortUrlPage {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the service holds more short URLs than this page carries
    pub fn has_more_pages(&self) -> bool {
        self.pagination.pages_count > self.pagination.current_page
    }
}

// Current Shlink nests pagination inside `shortUrls`; older payloads put it
// next to it. Both are accepted.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    short_urls: ShortUrlCollection,
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Deserialize)]
struct ShortUrlCollection {
    data: Vec<ShortUrlRecord>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

/// Body of `POST /rest/v2/short-urls`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub long_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_slug: Option<String>,
    pub find_if_exists: bool,
}

impl ShortenRequest {
    /// Build a request that reuses an existing short URL for the same long URL.
    /// An empty slug means the service picks one.
    pub fn new(long_url: impl Into<String>, custom_slug: Option<&str>) -> Self {
        Self {
            long_url: long_url.into(),
            custom_slug: custom_slug
                .map(str::trim)
                .filter(|slug| !slug.is_empty())
                .map(String::from),
            find_if_exists: true,
        }
    }
}

/// Result of a creation call. Only `short_url` is required for success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResult {
    #[serde(default)]
    pub short_code: Option<String>,
    #[serde(default)]
    pub short_url: Option<String>,
    #[serde(default)]
    pub long_url: Option<String>,
    #[serde(default)]
    pub date_created: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub visits_summary: Option<VisitsSummary>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub meta: Option<ShortUrlMeta>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub crawlable: Option<bool>,
}

/// RFC 7807 problem details sent by Shlink on 4xx responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub status: u16,
}

/// Decode a listing body into its first page.
pub fn decode_page(bytes: &[u8]) -> Result<ShortUrlPage> {
    let response: ListResponse = serde_json::from_slice(bytes)?;
    let records = response.short_urls.data;
    let pagination = response
        .short_urls
        .pagination
        .or(response.pagination)
        .unwrap_or_else(|| Pagination::single_page(records.len()));

    if pagination.items_in_current_page != records.len() as u64 {
        return Err(ShrtError::decode(format!(
            "pagination reports {} items in current page but {} were returned",
            pagination.items_in_current_page,
            records.len()
        )));
    }

    trace!(
        "Decoded page {}/{} with {} records",
        pagination.current_page,
        pagination.pages_count,
        records.len()
    );
    Ok(ShortUrlPage {
        records,
        pagination,
    })
}

/// Decode a creation body, requiring a usable `shortUrl`.
pub fn decode_shorten_result(bytes: &[u8]) -> Result<ShortenResult> {
    let result: ShortenResult = serde_json::from_slice(bytes)?;
    match result.short_url.as_deref() {
        Some(url) if !url.trim().is_empty() => Ok(result),
        _ => Err(ShrtError::decode("response does not contain a shortUrl")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "shortCode": "abc123",
        "shortUrl": "https://sho.rt/abc123",
        "longUrl": "https://example.com/page?utm_source=x",
        "deviceLongUrls": {"android": null, "ios": "https://apps.apple.com/x", "desktop": null},
        "dateCreated": "2023-05-01T10:15:30+02:00",
        "visitsSummary": {"total": 12, "nonBots": 10, "bots": 2},
        "tags": ["work", "docs"],
        "meta": {"validSince": "2023-05-01T00:00:00+00:00", "validUntil": null, "maxVisits": null},
        "domain": null,
        "title": "Example",
        "crawlable": false,
        "forwardQuery": true
    }"#;

    fn listing(records: &str, pagination: &str) -> Vec<u8> {
        format!(r#"{{"shortUrls": {{"data": [{}]{}}}}}"#, records, pagination).into_bytes()
    }

    #[test]
    fn test_decode_page_full_record() {
        let page = decode_page(&listing(RECORD, "")).unwrap();
        assert_eq!(page.len(), 1);

        let record = &page.records[0];
        assert_eq!(record.short_code, "abc123");
        assert_eq!(record.visits_summary.total, 12);
        assert_eq!(record.visits_summary.non_bots, 10);
        assert_eq!(record.visits_summary.bots, 2);
        assert!(record.tags.contains("docs"));
        assert_eq!(
            record.device_long_urls.ios.as_deref(),
            Some("https://apps.apple.com/x")
        );
        assert_eq!(record.device_long_urls.android, None);
        assert_eq!(record.domain, None);
        assert_eq!(record.title.as_deref(), Some("Example"));
        assert_eq!(record.meta.max_visits, None);
        assert_eq!(record.meta.valid_until, None);
        assert!(record.meta.valid_since.is_some());
        assert_eq!(
            record.date_created.to_rfc3339(),
            "2023-05-01T10:15:30+02:00"
        );
    }

    #[test]
    fn test_decode_page_distinguishes_zero_from_absent() {
        let record = RECORD
            .replace(r#""maxVisits": null"#, r#""maxVisits": 0"#)
            .replace(r#""title": "Example""#, r#""title": """#);
        let page = decode_page(&listing(&record, "")).unwrap();
        assert_eq!(page.records[0].meta.max_visits, Some(0));
        assert_eq!(page.records[0].title.as_deref(), Some(""));
    }

    #[test]
    fn test_decode_page_without_pagination_is_single_page() {
        let page = decode_page(&listing(RECORD, "")).unwrap();
        assert_eq!(page.pagination, Pagination::single_page(1));
        assert!(!page.has_more_pages());
    }

    #[test]
    fn test_decode_page_nested_pagination() {
        let pagination = r#", "pagination": {"currentPage": 1, "pagesCount": 3, "itemsPerPage": 1, "itemsInCurrentPage": 1, "totalItems": 3}"#;
        let page = decode_page(&listing(RECORD, pagination)).unwrap();
        assert_eq!(page.pagination.pages_count, 3);
        assert_eq!(page.len(), 1);
        assert!(page.has_more_pages());
    }

    #[test]
    fn test_decode_page_top_level_pagination() {
        let body = format!(
            r#"{{"shortUrls": {{"data": [{}]}}, "pagination": {{"currentPage": 1, "pagesCount": 2, "itemsPerPage": 1, "itemsInCurrentPage": 1, "totalItems": 2}}}}"#,
            RECORD
        );
        let page = decode_page(body.as_bytes()).unwrap();
        assert_eq!(page.pagination.total_items, 2);
    }

    #[test]
    fn test_decode_page_rejects_count_mismatch() {
        let pagination = r#", "pagination": {"currentPage": 1, "pagesCount": 1, "itemsPerPage": 10, "itemsInCurrentPage": 2, "totalItems": 2}"#;
        let err = decode_page(&listing(RECORD, pagination)).unwrap_err();
        assert!(matches!(err, ShrtError::Decode(_)));
    }

    #[test]
    fn test_decode_page_bad_timestamp() {
        let record = RECORD.replace("2023-05-01T10:15:30+02:00", "yesterday");
        let err = decode_page(&listing(&record, "")).unwrap_err();
        assert!(matches!(err, ShrtError::Decode(_)));
    }

    #[test]
    fn test_decode_page_malformed_json() {
        assert!(matches!(
            decode_page(b"{not json"),
            Err(ShrtError::Decode(_))
        ));
        assert!(matches!(
            decode_page(br#"{"data": []}"#),
            Err(ShrtError::Decode(_))
        ));
    }

    #[test]
    fn test_shorten_request_serialization() {
        let with_slug = ShortenRequest::new("https://example.com", Some("docs"));
        let json = serde_json::to_value(&with_slug).unwrap();
        assert_eq!(json["longUrl"], "https://example.com");
        assert_eq!(json["customSlug"], "docs");
        assert_eq!(json["findIfExists"], true);

        let without_slug = ShortenRequest::new("https://example.com", Some(""));
        let json = serde_json::to_value(&without_slug).unwrap();
        assert!(json.get("customSlug").is_none());
        assert_eq!(json["findIfExists"], true);
    }

    #[test]
    fn test_decode_shorten_result_minimal() {
        let result = decode_shorten_result(br#"{"shortUrl":"https://sho.rt/abc"}"#).unwrap();
        assert_eq!(result.short_url.as_deref(), Some("https://sho.rt/abc"));
        assert_eq!(result.date_created, None);
    }

    #[test]
    fn test_decode_shorten_result_missing_short_url() {
        let bodies: [&[u8]; 3] = [br#"{"shortCode":"abc"}"#, br#"{"shortUrl":"  "}"#, b"[]"];
        for body in bodies {
            let err = decode_shorten_result(body).unwrap_err();
            assert!(matches!(err, ShrtError::Decode(_)), "body {:?}", body);
        }
    }

    #[test]
    fn test_api_error_detail_decoding() {
        let detail: ApiErrorDetail = serde_json::from_str(
            r#"{"title":"Invalid custom slug","type":"https://shlink.io/api/error/non-unique-slug","detail":"Provided slug \"docs\" is already in use.","status":400}"#,
        )
        .unwrap();
        assert_eq!(detail.status, 400);
        assert_eq!(detail.kind, "https://shlink.io/api/error/non-unique-slug");
        assert!(detail.detail.contains("already in use"));
    }
}
