//! HTTP client abstraction for testability

use super::AdapterError;
use std::future::Future;
use tracing::{debug, trace};

/// Trait for asynchronous HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an async HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    ///
    /// # Returns
    ///
    /// The full response body as bytes or an error.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, AdapterError>> + Send;
}

/// Real HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with default configuration.
    ///
    /// No client-level timeout is set; the race deadline is the single
    /// budget bounding every request.
    pub fn new() -> Result<Self, AdapterError> {
        let client = reqwest::Client::builder().build().map_err(|e| {
            AdapterError::RequestBuild(format!("failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client })
    }
}

impl AsyncHttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, AdapterError> {
        let url = reqwest::Url::parse(url)
            .map_err(|e| AdapterError::RequestBuild(format!("invalid URL {}: {}", url, e)))?;

        trace!(url = %url, "HTTP GET request starting");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AdapterError::Transport(format!("request failed: {}", e)))?;

        // The status line is logged but not acted on: both services answer
        // unknown codes with a decodable JSON body, and those bodies reach
        // the coordinator as empty records.
        debug!(
            url = %url,
            status = response.status().as_u16(),
            "HTTP response received"
        );

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| AdapterError::BodyRead(format!("failed to read response: {}", e)))
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Mock HTTP client for testing.
    #[derive(Clone)]
    pub struct MockHttpClient {
        pub response: Result<Vec<u8>, AdapterError>,
    }

    impl AsyncHttpClient for MockHttpClient {
        async fn get(&self, _url: &str) -> Result<Vec<u8>, AdapterError> {
            self.response.clone()
        }
    }

    /// Mock HTTP client whose request never completes.
    pub struct PendingHttpClient;

    impl AsyncHttpClient for PendingHttpClient {
        async fn get(&self, _url: &str) -> Result<Vec<u8>, AdapterError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_mock_client_success() {
        let mock = MockHttpClient {
            response: Ok(vec![1, 2, 3, 4]),
        };

        let result = mock.get("http://example.com").await;
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_mock_client_error() {
        let mock = MockHttpClient {
            response: Err(AdapterError::Transport("connection refused".to_string())),
        };

        let result = mock.get("http://example.com").await;
        assert!(matches!(result.unwrap_err(), AdapterError::Transport(_)));
    }

    #[tokio::test]
    async fn test_real_client_rejects_invalid_url() {
        let client = ReqwestClient::new().unwrap();

        let result = client.get("not a url").await;
        assert!(matches!(result.unwrap_err(), AdapterError::RequestBuild(_)));
    }
}
