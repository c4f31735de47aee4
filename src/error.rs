use std::num::ParseIntError;

use thiserror::Error;

/// Everything that can abort a crawl step.
///
/// A step that fails never yields items or follow-up requests, so callers
/// only ever see a complete `CrawlOutput` or one of these.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("HTTP call to {url} resulted in HTTP code {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("malformed image url {url:?}: {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("pagination cursor: {0}")]
    Cursor(#[from] CursorError),

    #[error("no strategy registered for id {0:?}")]
    UnknownStrategy(String),
}

/// The network exchange itself could not complete (DNS, connect, timeout,
/// body read).
#[derive(Debug, Error)]
#[error("request to {url} failed: {source}")]
pub struct TransportError {
    pub url: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl TransportError {
    pub fn new<E>(url: &str, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self {
            url: url.to_owned(),
            source: source.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CursorError {
    #[error("field `{0}` is missing from request body")]
    Missing(String),

    #[error("field `{field}` is not a number: {value:?}")]
    NotNumeric {
        field: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("field `{0}` cannot be advanced past {max}", max = i64::MAX)]
    Overflow(String),

    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config.user_agent cannot be empty")]
    EmptyUserAgent,

    #[error("config.{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}
