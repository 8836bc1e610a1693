//! Error types for loading dashboard data.
//!
//! | Error | Raised by | Outcome |
//! |-------|-----------|---------|
//! | [`NetworkError`] | transport failure, non-2xx | fallback attempted |
//! | [`LoadError::Parse`] | malformed envelope | fallback attempted |
//! | [`LoadError::FallbackUnavailable`] | snapshot missing/malformed | load fails |
//!
//! All of them are caught at the data store boundary; views only ever see a
//! finished [`crate::store::FetchState`]. Sidebar actions are a closed enum, so
//! there is no error for an unknown transition.

mod load;
mod network;

pub use load::LoadError;
pub use network::NetworkError;

/// Result alias for data loading.
pub type LoadResult<T> = Result<T, LoadError>;
