//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`EmbeddedFallback`] / [`FileFallback`] - Local snapshot sources
//! - [`SystemClock`] - Real monotonic clock
//!
//! The [`mock`] submodule provides test doubles.

pub mod clock;
pub mod fallback;
pub mod mock;
pub mod reqwest_http;

pub use clock::SystemClock;
pub use fallback::{EmbeddedFallback, FileFallback, BUNDLED_SNAPSHOT};
pub use mock::{ManualClock, MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
