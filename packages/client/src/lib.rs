//! Headless media-room client for Studyroom study rooms.
//!
//! Polls the room's member list, reconciles it with the snapshot taken at
//! room entry, and decides which peers this participant sends WebRTC offers
//! to. Signaling and peer connections are behind the [`domain::PeerTransport`]
//! port.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
pub mod error;
pub mod runner;
pub mod session;

pub use runner::run_room_client;
pub use session::{MediaRoomSession, RoomPorts, RoomStage, SessionTiming};
