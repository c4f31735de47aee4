use std::collections::HashMap;
use std::sync::Arc;

use crate::error::CrawlError;
use crate::request::{CrawlOutput, CrawlRequest};
use crate::strategy::Strategy;

/// Routes requests to strategies by id.
///
/// Read-only once built, so it can be shared behind an `Arc` by as many
/// driver threads as needed.
#[derive(Default, Clone)]
pub struct StrategyRegistry {
    strategies: HashMap<String, Arc<dyn Strategy>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a strategy under its id.
    ///
    /// Returns whether the strategy is registered. Ids must be unique, so a
    /// strategy whose id is already taken is dropped.
    pub fn register(&mut self, strategy: Arc<dyn Strategy>) -> bool {
        let id = strategy.id().to_owned();
        if self.strategies.contains_key(&id) {
            log::warn!("strategy {} already registered", id);
            return false;
        }
        log::debug!("registered strategy {}", id);
        self.strategies.insert(id, strategy);
        true
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn Strategy>> {
        self.strategies.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.strategies.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Run one crawl step with the strategy `request` is tagged for.
    pub fn crawl(&self, request: &CrawlRequest) -> Result<CrawlOutput, CrawlError> {
        let strategy = self
            .get(&request.strategy_id)
            .ok_or_else(|| CrawlError::UnknownStrategy(request.strategy_id.clone()))?;
        strategy.crawl(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ExtractedItem;

    struct Fixed(&'static str);

    impl Strategy for Fixed {
        fn id(&self) -> &str {
            self.0
        }

        fn crawl(&self, request: &CrawlRequest) -> Result<CrawlOutput, CrawlError> {
            Ok(CrawlOutput {
                items: vec![ExtractedItem {
                    item_url: request.url.clone(),
                    page_url: request.url.clone(),
                    title: self.0.to_owned(),
                }],
                next_requests: vec![],
            })
        }
    }

    #[test]
    fn routes_by_strategy_id() {
        let mut registry = StrategyRegistry::new();
        assert!(registry.register(Arc::new(Fixed("a"))));
        assert!(registry.register(Arc::new(Fixed("b"))));

        let output = registry.crawl(&CrawlRequest::get("b", "https://b.example/")).unwrap();
        assert_eq!(output.items[0].title, "b");
        assert!(output.is_terminal());

        let mut ids: Vec<&str> = registry.ids().collect();
        ids.sort();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn rejects_duplicate_id() {
        let mut registry = StrategyRegistry::new();
        assert!(registry.register(Arc::new(Fixed("a"))));
        assert!(!registry.register(Arc::new(Fixed("a"))));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_strategy_is_an_error() {
        let registry = StrategyRegistry::new();
        assert!(registry.is_empty());
        let err = registry.crawl(&CrawlRequest::get("missing", "https://x.example/")).unwrap_err();
        assert!(matches!(err, CrawlError::UnknownStrategy(ref id) if id == "missing"));
    }
}
