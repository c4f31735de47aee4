use std::fmt;

use serde::{Deserialize, Serialize};

/// A media record pulled out of a search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedItem {
    /// Location of the image itself.
    pub item_url: String,
    /// Page the image was found on.
    pub page_url: String,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }

    /// Only POST exchanges carry a body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pending exchange, tagged with the id of the strategy that knows how
/// to process it.
///
/// Requests are values: advancing a crawl builds a new request, it never
/// edits the one being processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlRequest {
    pub method: HttpMethod,
    pub url: String,
    pub strategy_id: String,
    pub content_type: String,
    pub body: String,
}

impl CrawlRequest {
    pub fn get(strategy_id: &str, url: &str) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.to_owned(),
            strategy_id: strategy_id.to_owned(),
            content_type: String::new(),
            body: String::new(),
        }
    }

    pub fn post(strategy_id: &str, url: &str, content_type: &str, body: String) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.to_owned(),
            strategy_id: strategy_id.to_owned(),
            content_type: content_type.to_owned(),
            body,
        }
    }

    /// The body to put on the wire, if any.
    pub fn wire_body(&self) -> Option<&str> {
        if self.method.has_body() {
            Some(&self.body)
        } else {
            None
        }
    }
}

/// Result of a successful crawl step.
///
/// An empty `next_requests` means the chain this request belongs to is
/// finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlOutput {
    pub items: Vec<ExtractedItem>,
    pub next_requests: Vec<CrawlRequest>,
}

impl CrawlOutput {
    pub fn is_terminal(&self) -> bool {
        self.next_requests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_request_has_no_wire_body() {
        let mut req = CrawlRequest::get("site", "https://example.com/");
        req.body = "position=1".to_owned();
        assert_eq!(req.wire_body(), None);
    }

    #[test]
    fn post_request_sends_body() {
        let req = CrawlRequest::post(
            "site",
            "https://example.com/api",
            "application/x-www-form-urlencoded",
            "position=1".to_owned(),
        );
        assert_eq!(req.wire_body(), Some("position=1"));
        assert_eq!(req.method.to_string(), "POST");
    }

    #[test]
    fn method_serializes_uppercase() {
        let json = serde_json::to_string(&HttpMethod::Post).unwrap();
        assert_eq!(json, "\"POST\"");
        let method: HttpMethod = serde_json::from_str("\"GET\"").unwrap();
        assert_eq!(method, HttpMethod::Get);
    }
}
