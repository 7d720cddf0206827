//! HTTP capability used by the fetcher

use async_trait::async_trait;
use couscous_core::types::NetworkConfig;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::error::FetchError;

/// A completed HTTP exchange, whatever its status
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,

    /// Raw response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Build a response from a status and body
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is exactly 200
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// The request never produced a response
#[derive(Error, Debug)]
#[error("Request to {url} failed: {message}")]
pub struct TransportError {
    /// Requested URL
    pub url: String,

    /// Underlying failure
    pub message: String,
}

impl TransportError {
    /// Create a transport error for a URL
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// Minimal GET-only HTTP client
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a GET request and return the response regardless of status
    async fn get(&self, url: &str) -> std::result::Result<HttpResponse, TransportError>;
}

/// `reqwest`-backed client used by the CLI
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a client with the configured user agent and timeout
    pub fn new(network: &NetworkConfig) -> crate::error::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&network.user_agent)
            .timeout(Duration::from_secs(network.http_timeout_secs))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> std::result::Result<HttpResponse, TransportError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::new(url, e.to_string()))?;

        let status = response.status().as_u16();
        debug!("{} -> {}", url, status);

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::new(url, e.to_string()))?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_response_ok_is_exactly_200() {
        assert!(HttpResponse::new(200, "x").is_ok());
        assert!(!HttpResponse::new(204, "").is_ok());
        assert!(!HttpResponse::new(404, "").is_ok());
    }

    #[tokio::test]
    async fn test_reqwest_client_returns_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(404).set_body_string("nope"))
            .mount(&server)
            .await;

        let client = ReqwestClient::new(&NetworkConfig::default()).unwrap();
        let response = client
            .get(&format!("{}/missing", server.uri()))
            .await
            .unwrap();

        assert_eq!(response.status, 404);
        assert_eq!(response.body, b"nope");
    }

    #[tokio::test]
    async fn test_reqwest_client_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/gone", listener.local_addr().unwrap());
        drop(listener);

        let client = ReqwestClient::new(&NetworkConfig::default()).unwrap();
        let err = client.get(&url).await.unwrap_err();
        assert_eq!(err.url, url);
    }
}
