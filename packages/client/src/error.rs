//! Error types for the media-room client.

use thiserror::Error;

use crate::domain::SnapshotError;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Room snapshot could not be loaded
    #[error("Cannot enter room: {0}")]
    Snapshot(#[from] SnapshotError),

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}
