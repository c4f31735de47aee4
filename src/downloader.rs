use crate::config::Config;
use crate::error::TransportError;
use crate::request::HttpMethod;

/// An outbound exchange as handed to the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpExchange {
    pub method: HttpMethod,
    pub url: String,
    pub user_agent: String,
    pub content_type: String,
    /// Only set for methods that carry a body.
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Performs the network call for a strategy.
///
/// A non-success status is still a response, not an error: strategies
/// decide for themselves what status they accept. Implementations are shared
/// between strategies and threads.
pub trait HttpClient: Send + Sync {
    fn execute(&self, exchange: &HttpExchange) -> Result<HttpResponse, TransportError>;
}

/// Blocking client backed by a `ureq::Agent`, which pools connections and is
/// cheap to share.
#[derive(Clone)]
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(config.timeout_connect)
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();
        Self { agent }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl HttpClient for UreqClient {
    fn execute(&self, exchange: &HttpExchange) -> Result<HttpResponse, TransportError> {
        let url = exchange.url.as_str();
        let request = self
            .agent
            .request(exchange.method.as_str(), url)
            .set("User-Agent", &exchange.user_agent);

        let result = match &exchange.body {
            Some(body) => {
                let request = if exchange.content_type.is_empty() {
                    request
                } else {
                    request.set("Content-Type", &exchange.content_type)
                };
                request.send_string(body)
            }
            None => request.call(),
        };

        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => {
                log::error!("{}", transport);
                return Err(TransportError::new(url, transport.to_string()));
            }
        };

        let status = response.status();
        let body = response
            .into_string()
            .map_err(|e| TransportError::new(url, e))?;
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use super::*;

    fn exchange(method: HttpMethod, url: String, body: Option<&str>) -> HttpExchange {
        HttpExchange {
            method,
            url,
            user_agent: "test-agent".to_owned(),
            content_type: "application/x-www-form-urlencoded".to_owned(),
            body: body.map(str::to_owned),
        }
    }

    #[test]
    fn posts_body_with_headers() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api")
            .match_header("user-agent", "test-agent")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body("position=1")
            .with_status(200)
            .with_body("{\"next_page\":false}")
            .create();

        let url = format!("{}/api", server.url());
        let response = UreqClient::default()
            .execute(&exchange(HttpMethod::Post, url, Some("position=1")))
            .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "{\"next_page\":false}");
        mock.assert();
    }

    #[test]
    fn get_sends_no_content_type() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api")
            .match_header("user-agent", "test-agent")
            .match_header("content-type", mockito::Matcher::Missing)
            .with_status(200)
            .with_body("ok")
            .create();

        let url = format!("{}/api", server.url());
        let response = UreqClient::default()
            .execute(&exchange(HttpMethod::Get, url, None))
            .unwrap();
        assert_eq!(response.body, "ok");
        mock.assert();
    }

    #[test]
    fn error_status_is_returned_as_response() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api")
            .with_status(503)
            .with_body("busy")
            .create();

        let url = format!("{}/api", server.url());
        let response = UreqClient::default()
            .execute(&exchange(HttpMethod::Get, url, None))
            .unwrap();
        assert_eq!(response.status, 503);
        assert_eq!(response.body, "busy");
        mock.assert();
    }

    #[test]
    fn connection_failure_is_transport_error() {
        // Grab a free port, then close it so nothing is listening.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/api", listener.local_addr().unwrap());
        drop(listener);

        let err = UreqClient::default()
            .execute(&exchange(HttpMethod::Get, url.clone(), None))
            .unwrap_err();
        assert_eq!(err.url, url);
    }
}
