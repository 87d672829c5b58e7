//! Domain error types.

use thiserror::Error;

/// MemberId の検証エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemberIdError {
    /// Identifier is empty (or whitespace only)
    #[error("member id must not be empty")]
    Empty,
}

/// Errors returned by a [`MemberSource`](super::MemberSource).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemberSourceError {
    /// The member list could not be fetched
    #[error("failed to fetch members for room {room}: {reason}")]
    Fetch { room: u64, reason: String },

    /// The response could not be decoded
    #[error("invalid member list payload: {0}")]
    InvalidPayload(String),
}

/// Errors returned by an [`RtcConfigSource`](super::RtcConfigSource).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RtcConfigError {
    /// The configuration service could not be reached or answered with an error
    #[error("ice server request failed: {0}")]
    Request(String),

    /// The response could not be decoded
    #[error("invalid ice server payload: {0}")]
    InvalidPayload(String),
}

/// Errors returned by a [`PeerTransport`](super::PeerTransport).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Offer could not be created or delivered to the peer
    #[error("call to '{peer}' failed: {reason}")]
    CallFailed { peer: String, reason: String },

    /// Transport has no local media attached yet
    #[error("local stream is not attached")]
    LocalStreamMissing,
}

/// Errors returned by a [`MediaSource`](super::MediaSource).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    /// Capture device is unavailable or permission was denied
    #[error("local media unavailable: {0}")]
    Unavailable(String),
}

/// Errors returned by an [`IdentityStore`](super::IdentityStore).
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Persisted identity could not be read
    #[error("failed to read persisted identity: {0}")]
    Io(#[from] std::io::Error),
}

/// Room snapshot loading errors
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Snapshot file could not be read
    #[error("failed to read room snapshot: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot JSON is malformed
    #[error("invalid room snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}
