//! Use cases of the media-room client.
//!
//! Each use case wraps one best-effort interaction with an external
//! collaborator and turns its failures into a local recovery.

pub mod acquire_rtc_config;
pub mod send_offer;
pub mod sync_roster;

pub use acquire_rtc_config::AcquireRtcConfigUseCase;
pub use send_offer::{MAX_OFFER_ATTEMPTS, OfferOutcome, SendOfferUseCase};
pub use sync_roster::SyncRosterUseCase;
