//! AppMessage enum for async communication within the application.

use crate::store::FetchState;

/// Messages delivered to the UI task from spawned work.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The data store finished its one load, successfully or not
    DataLoaded(FetchState),
}
