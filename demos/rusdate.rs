use std::collections::VecDeque;
use std::sync::Arc;

use media_crawler::{Config, CrawlRequest, RusDateStrategy, SearchQuery, Strategy, UreqClient};

// Walks a single search chain page by page and prints what it finds.
// Stops after `MAX_PAGES` so the demo stays polite.
const MAX_PAGES: usize = 3;

fn main() {
    env_logger::init();

    let config = Config::default();
    let registry = match media_crawler::registry_with_config(&config) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("bad config: {}", e);
            return;
        }
    };

    let seeder = RusDateStrategy::new(Arc::new(UreqClient::new(&config)));
    let query = SearchQuery {
        age_from: 20,
        age_to: 26,
        geo_select: 30,
        ..SearchQuery::default()
    };
    let seed = match seeder.seed_request(&query) {
        Ok(seed) => seed,
        Err(e) => {
            eprintln!("cannot build seed request: {}", e);
            return;
        }
    };
    log::info!("seeding {} with {}", seeder.id(), seed.body);

    let mut queue: VecDeque<CrawlRequest> = VecDeque::from(vec![seed]);
    let mut pages = 0;
    let mut item_count = 0;
    while let Some(request) = queue.pop_front() {
        if pages == MAX_PAGES {
            break;
        }
        pages += 1;

        match registry.crawl(&request) {
            Ok(output) => {
                for item in &output.items {
                    println!("{}\t{}\t{}", item.title, item.page_url, item.item_url);
                }
                item_count += output.items.len();
                queue.extend(output.next_requests);
            }
            Err(e) => {
                log::error!("{}", e);
            }
        }
    }

    println!("pages: {}, items: {}", pages, item_count);
}
