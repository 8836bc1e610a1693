//! chemdash - a terminal dashboard for chemical inventory and safety compliance.
//!
//! The library exposes the data store, the sidebar reducer, the resize
//! coordinator and the views so integration tests can drive them directly.

pub mod adapters;
pub mod app;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
pub mod resize;
pub mod sidebar;
pub mod startup;
pub mod store;
pub mod terminal;
pub mod traits;
pub mod ui;
