//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses and latency
//! - [`ManualClock`] - Clock advanced explicitly by the test

pub mod clock;
pub mod http;

pub use clock::ManualClock;
pub use http::{MockHttpClient, MockResponse};
