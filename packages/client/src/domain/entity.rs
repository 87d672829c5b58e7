//! Entities of the media-room domain.

use std::{
    collections::{BTreeMap, HashMap},
    path::Path,
};

use serde::{Deserialize, Serialize};

use super::{error::SnapshotError, value_object::MemberId};

/// Role of a member inside a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    #[default]
    Member,
}

impl Role {
    /// Map the role string used by the member API (`HOST` is the room owner)
    pub fn from_api(role: &str) -> Self {
        if role == "HOST" { Self::Owner } else { Self::Member }
    }
}

/// Media toggles shown for a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFlags {
    pub cam_on: bool,
    pub screen_on: bool,
}

impl Default for MediaFlags {
    /// Camera on, screen share off
    fn default() -> Self {
        Self {
            cam_on: true,
            screen_on: false,
        }
    }
}

/// Room member as displayed on the stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub is_me: bool,
    #[serde(default)]
    pub media: MediaFlags,
}

impl Member {
    /// Placeholder entry for the local participant when no richer data exists
    pub fn placeholder_me(id: MemberId) -> Self {
        Self {
            id,
            name: "me".to_string(),
            role: Role::Member,
            email: String::new(),
            avatar_url: None,
            is_me: true,
            media: MediaFlags::default(),
        }
    }
}

/// Member record as returned by the polling source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolledMember {
    pub user_number: u64,
    pub nickname: String,
    pub role: Role,
    pub avatar_url: Option<String>,
}

/// Static room information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomInfo {
    /// Room identifier (`room-<n>`)
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub media_enabled: bool,
}

impl RoomInfo {
    /// Numeric part of the room id (`room-2` → 2), 0 when it has none
    pub fn room_number(&self) -> u64 {
        let suffix = self.id.split('-').nth(1).unwrap_or(&self.id);
        suffix.trim().parse::<u64>().unwrap_or(0)
    }
}

/// Room state captured once at room entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub info: RoomInfo,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl RoomSnapshot {
    /// Parse a snapshot from its JSON form
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot from a JSON file
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Snapshot member flagged as the local participant
    pub fn me(&self) -> Option<&Member> {
        self.members.iter().find(|m| m.is_me)
    }
}

/// Kind of a media track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackKind {
    Audio,
    Video,
}

/// Opaque handle to a media stream (local capture or remote peer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaStreamHandle {
    pub id: String,
    pub tracks: Vec<TrackKind>,
}

impl MediaStreamHandle {
    pub fn new(id: impl Into<String>, tracks: Vec<TrackKind>) -> Self {
        Self {
            id: id.into(),
            tracks,
        }
    }
}

/// Streams currently received from remote peers
pub type RemoteStreams = HashMap<MemberId, MediaStreamHandle>;

/// Stream per member for rendering, including the local participant.
///
/// `None` means the member is known but has no stream yet.
pub type StreamsByUser = BTreeMap<MemberId, Option<MediaStreamHandle>>;
