//! Domain layer of the media-room client.
//!
//! Value objects, entities and the pure coordination policy (initiator rule,
//! roster reconciliation, offer planning) live here, together with the port
//! traits the use cases depend on. Concrete adapters are provided by the
//! infrastructure layer.

pub mod entity;
pub mod error;
pub mod identity;
pub mod initiator;
pub mod offer_plan;
pub mod port;
pub mod roster;
pub mod rtc_config;
pub mod value_object;

pub use entity::{
    MediaFlags, MediaStreamHandle, Member, PolledMember, RemoteStreams, Role, RoomInfo,
    RoomSnapshot, StreamsByUser, TrackKind,
};
pub use error::{
    IdentityError, MediaError, MemberIdError, MemberSourceError, RtcConfigError, SnapshotError,
    TransportError,
};
pub use initiator::{id_rank, should_initiate};
pub use offer_plan::OfferPlanner;
pub use port::{IdentityStore, MediaSource, MemberSource, PeerTransport, RtcConfigSource};
pub use rtc_config::{IceServer, RtcConfig};
pub use value_object::MemberId;
