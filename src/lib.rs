mod config;
mod downloader;
mod error;
mod registry;
mod request;
mod strategy;

pub mod pagination;
pub mod strategies;
pub mod util;

// (Re) Exports
pub use config::{Config, DEFAULT_USER_AGENT};
pub use downloader::{HttpClient, HttpExchange, HttpResponse, UreqClient};
pub use error::{ConfigError, CrawlError, CursorError, TransportError};
pub use registry::StrategyRegistry;
pub use request::{CrawlOutput, CrawlRequest, ExtractedItem, HttpMethod};
pub use strategies::{RusDateStrategy, SearchQuery};
pub use strategy::Strategy;

use std::sync::Arc;

/// Registry holding every built-in strategy, sharing one client built from
/// `config`.
pub fn registry_with_config(config: &Config) -> Result<StrategyRegistry, ConfigError> {
    config.sanity_check()?;
    let client: Arc<dyn HttpClient> = Arc::new(UreqClient::new(config));
    let mut registry = StrategyRegistry::new();
    registry.register(Arc::new(
        RusDateStrategy::new(client).with_user_agent(&config.user_agent),
    ));
    Ok(registry)
}

pub fn registry() -> StrategyRegistry {
    let client: Arc<dyn HttpClient> = Arc::new(UreqClient::default());
    let mut registry = StrategyRegistry::new();
    registry.register(Arc::new(RusDateStrategy::new(client)));
    registry
}
