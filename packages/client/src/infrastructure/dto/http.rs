//! HTTP API DTOs of the room API.

use serde::{Deserialize, Serialize};

/// Member entry of `GET /api/rooms/{roomId}/members`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub user_id: u64,
    pub nickname: String,
    /// `HOST` for the room owner
    pub role: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

/// `urls` of an ICE server may be a single URL or a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IceUrlsDto {
    One(String),
    Many(Vec<String>),
}

/// ICE server entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IceServerDto {
    pub urls: IceUrlsDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
}

/// Body of `GET /api/webrtc/ice-servers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IceServersResponseDto {
    #[serde(default)]
    pub ice_servers: Vec<IceServerDto>,
}
