//! Port traits the use cases depend on.
//!
//! The domain defines what it needs; the infrastructure layer provides the
//! adapters (HTTP APIs, files, peer transport). Use cases hold them as
//! `Arc<dyn _>`.

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::{
    entity::{MediaStreamHandle, PolledMember, RemoteStreams},
    error::{IdentityError, MediaError, MemberSourceError, RtcConfigError, TransportError},
    rtc_config::RtcConfig,
    value_object::MemberId,
};

/// Source of the live member list of a room
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MemberSource: Send + Sync {
    /// Fetch the current members of the room
    async fn fetch_members(&self, room_number: u64) -> Result<Vec<PolledMember>, MemberSourceError>;
}

/// Service issuing ICE server configuration
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RtcConfigSource: Send + Sync {
    /// Request the configuration for a (user, room) pair
    async fn fetch_rtc_config(
        &self,
        user_number: u64,
        room_number: u64,
    ) -> Result<RtcConfig, RtcConfigError>;
}

/// Peer connection transport (signaling + peer connections)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PeerTransport: Send + Sync {
    /// Use `config` for peer connections created from now on
    async fn apply_config(&self, config: &RtcConfig);

    /// Attach the local capture to outbound connections
    async fn attach_local_stream(&self, stream: &MediaStreamHandle);

    /// Create a connection to `peer` and send the offer
    async fn call_user(&self, peer: &MemberId) -> Result<(), TransportError>;

    /// Streams currently received from remote peers
    async fn remote_streams(&self) -> RemoteStreams;
}

/// Local media capture
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Acquire the local capture stream
    async fn acquire(&self) -> Result<MediaStreamHandle, MediaError>;
}

/// Persisted user record of the local participant
#[cfg_attr(test, automock)]
pub trait IdentityStore: Send + Sync {
    /// Raw persisted record, `None` when nothing is stored
    fn load(&self) -> Result<Option<String>, IdentityError>;
}
