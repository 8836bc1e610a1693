//! Mock configuration helpers for integration tests.
//!
//! Re-exports the mocks from `chemdash::adapters::mock` and adds builders for
//! the responses the data store tests need.

pub use chemdash::adapters::mock::{ManualClock, MockHttpClient, MockResponse};
pub use chemdash::traits::{Headers, HttpClient, HttpError, Response};

use bytes::Bytes;
use std::time::Duration;

/// Builder for a [`MockHttpClient`].
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Answer `url` with the given status and body.
    pub fn with_json_response(self, url: &str, status: u16, json: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Success(Response::new(status, Bytes::from(json.to_string()))),
        );
        self
    }

    /// Fail `url` at the transport level.
    #[allow(dead_code)]
    pub fn with_connection_error(self, url: &str, message: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Error(HttpError::ConnectionFailed(message.to_string())),
        );
        self
    }

    #[allow(dead_code)]
    pub fn with_delay(self, delay: Duration) -> Self {
        self.client.set_delay(delay);
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
