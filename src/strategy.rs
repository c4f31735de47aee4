use crate::error::CrawlError;
use crate::request::{CrawlOutput, CrawlRequest};

/// Strategy interface
///
/// A strategy knows how to turn one exchange with a particular site into
/// extracted items plus the request(s) that continue the crawl.
pub trait Strategy: Send + Sync {
    /// Get strategy id.
    ///
    /// This is used to route requests to the correct strategy so make sure
    /// that it's unique for each strategy and equal to the `strategy_id` of
    /// the requests it emits.
    fn id(&self) -> &str;

    /// Perform one crawl step.
    ///
    /// Issues exactly one outbound exchange. Implementations must not keep
    /// per-call state: any cursor travels inside the request, so one
    /// instance can serve many chains concurrently.
    fn crawl(&self, request: &CrawlRequest) -> Result<CrawlOutput, CrawlError>;
}
