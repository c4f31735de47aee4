//! Member search on rusdate.de.
//!
//! The search endpoint is a form POST whose body carries the page number in
//! its `position` field. Each response lists one page of members and says
//! whether another page follows.
//!
//! Example payload:
//! `action=search&op=s&pt=&genre=1&look_genre=0&age_from=20&age_to=26&geo_select=30&look_photo=1&look_online=0&position=2&portion=12&service=Search&task=GetSearchResult`

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_USER_AGENT;
use crate::downloader::{HttpClient, HttpExchange};
use crate::error::CrawlError;
use crate::pagination;
use crate::request::{CrawlOutput, CrawlRequest, ExtractedItem};
use crate::strategy::Strategy;
use crate::util;

pub const STRATEGY_ID: &str = "RusDate";
pub const DEFAULT_BASE_URL: &str = "https://rusdate.de";
pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

const API_PATH: &str = "api/get_rest.php";
const PROFILE_PATH: &str = "u/";
const TITLE_LABEL: &str = "RusDate";
const CURSOR_FIELD: &str = "position";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    members: Vec<Member>,
    next_page: bool,
}

#[derive(Debug, Deserialize)]
struct Member {
    username: String,
    name: String,
    main_photo: MainPhoto,
}

#[derive(Debug, Deserialize)]
struct MainPhoto {
    photo: String,
}

/// Parameters of a member search, used to build the first request of a
/// chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Own gender id.
    pub genre: u8,
    /// Gender id being looked for.
    pub look_genre: u8,
    pub age_from: u8,
    pub age_to: u8,
    /// Region id.
    pub geo_select: u32,
    pub photo_only: bool,
    pub online_only: bool,
    /// Page to start from.
    pub position: i64,
    /// Members per page.
    pub portion: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            genre: 1,
            look_genre: 0,
            age_from: 18,
            age_to: 99,
            geo_select: 0,
            photo_only: true,
            online_only: false,
            position: 1,
            portion: 12,
        }
    }
}

// Field order is the order the site's own search form submits.
#[derive(Serialize)]
struct SearchForm {
    action: &'static str,
    op: &'static str,
    pt: &'static str,
    genre: u8,
    look_genre: u8,
    age_from: u8,
    age_to: u8,
    geo_select: u32,
    look_photo: u8,
    look_online: u8,
    position: i64,
    portion: u32,
    service: &'static str,
    task: &'static str,
}

impl From<&SearchQuery> for SearchForm {
    fn from(query: &SearchQuery) -> Self {
        Self {
            action: "search",
            op: "s",
            pt: "",
            genre: query.genre,
            look_genre: query.look_genre,
            age_from: query.age_from,
            age_to: query.age_to,
            geo_select: query.geo_select,
            look_photo: query.photo_only as u8,
            look_online: query.online_only as u8,
            position: query.position,
            portion: query.portion,
            service: "Search",
            task: "GetSearchResult",
        }
    }
}

/// Crawls member photos out of the rusdate.de search API.
///
/// Holds no per-chain state; the page cursor lives in each request body.
pub struct RusDateStrategy {
    client: Arc<dyn HttpClient>,
    user_agent: String,
    base_url: String,
    endpoint: String,
    profile_prefix: String,
}

impl RusDateStrategy {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self {
            client,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            base_url: util::join_path(DEFAULT_BASE_URL, ""),
            endpoint: util::join_path(DEFAULT_BASE_URL, API_PATH),
            profile_prefix: util::join_path(DEFAULT_BASE_URL, PROFILE_PATH),
        }
    }

    /// Point the strategy at another host, e.g. a mirror.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = util::join_path(base_url, "");
        self.endpoint = util::join_path(base_url, API_PATH);
        self.profile_prefix = util::join_path(base_url, PROFILE_PATH);
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_owned();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// First request of a search chain.
    pub fn seed_request(
        &self,
        query: &SearchQuery,
    ) -> Result<CrawlRequest, serde_urlencoded::ser::Error> {
        let body = serde_urlencoded::to_string(SearchForm::from(query))?;
        Ok(self.search_request(body))
    }

    fn search_request(&self, body: String) -> CrawlRequest {
        CrawlRequest::post(STRATEGY_ID, &self.endpoint, CONTENT_TYPE, body)
    }

    fn fetch(&self, request: &CrawlRequest) -> Result<String, CrawlError> {
        let exchange = HttpExchange {
            method: request.method,
            url: request.url.clone(),
            user_agent: self.user_agent.clone(),
            content_type: request.content_type.clone(),
            body: request.wire_body().map(str::to_owned),
        };
        log::debug!("{} {}", exchange.method, exchange.url);

        let response = self.client.execute(&exchange)?;
        if response.status != 200 {
            log::warn!("{} {} returned {}", exchange.method, exchange.url, response.status);
            return Err(CrawlError::HttpStatus {
                url: request.url.clone(),
                status: response.status,
            });
        }
        Ok(response.body)
    }

    fn parse_search(&self, request_body: &str, response_body: &str) -> Result<CrawlOutput, CrawlError> {
        let response: SearchResponse = serde_json::from_str(response_body)?;

        let mut items = Vec::with_capacity(response.members.len());
        for member in &response.members {
            if let Some(item) = self.extract_member(member)? {
                items.push(item);
            }
        }

        let next_body = pagination::advance_cursor(request_body, CURSOR_FIELD)?;

        let next_requests = if response.next_page {
            vec![self.search_request(next_body)]
        } else {
            log::info!("{} search finished", STRATEGY_ID);
            vec![]
        };

        Ok(CrawlOutput { items, next_requests })
    }

    /// Members without a photo yield nothing. Relative photo paths resolve
    /// against the site.
    fn extract_member(&self, member: &Member) -> Result<Option<ExtractedItem>, CrawlError> {
        let photo = util::unescape_slashes(&member.main_photo.photo);
        if photo.trim().is_empty() {
            log::debug!("{} has no main photo", member.username);
            return Ok(None);
        }
        let image_url = util::join_url(&self.base_url, &photo).map_err(|source| {
            CrawlError::MalformedUrl {
                url: member.main_photo.photo.clone(),
                source,
            }
        })?;
        Ok(Some(ExtractedItem {
            item_url: image_url.to_string(),
            page_url: format!("{}{}", self.profile_prefix, member.username),
            title: format!("{} {}", TITLE_LABEL, member.name),
        }))
    }
}

impl Strategy for RusDateStrategy {
    fn id(&self) -> &str {
        STRATEGY_ID
    }

    fn crawl(&self, request: &CrawlRequest) -> Result<CrawlOutput, CrawlError> {
        let body = self.fetch(request)?;
        self.parse_search(&request.body, &body)
    }
}
