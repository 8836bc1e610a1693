//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET used by the data store
//! - [`FallbackSource`] - Bundled local snapshot used when the remote fails
//! - [`Clock`] - Time source for the resize debouncer
//! - [`Resizable`] - Views that re-measure on a resize signal

pub mod clock;
pub mod fallback;
pub mod http;
pub mod resizable;

pub use clock::Clock;
pub use fallback::{FallbackReadError, FallbackSource};
pub use http::{Headers, HttpClient, HttpError, Response};
pub use resizable::Resizable;
