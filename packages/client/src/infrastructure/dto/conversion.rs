//! Conversion logic between DTOs and domain entities.

use crate::domain::{IceServer, PolledMember, Role, RtcConfig};
use crate::infrastructure::dto::http as dto;

// ========================================
// DTO → Domain Entity
// ========================================

impl From<dto::MemberDto> for PolledMember {
    fn from(dto: dto::MemberDto) -> Self {
        Self {
            user_number: dto.user_id,
            nickname: dto.nickname,
            role: Role::from_api(&dto.role),
            avatar_url: dto.profile_image_url,
        }
    }
}

impl From<dto::IceServerDto> for IceServer {
    fn from(dto: dto::IceServerDto) -> Self {
        let urls = match dto.urls {
            dto::IceUrlsDto::One(url) => vec![url],
            dto::IceUrlsDto::Many(urls) => urls,
        };
        Self {
            urls,
            username: dto.username,
            credential: dto.credential,
        }
    }
}

impl From<dto::IceServersResponseDto> for RtcConfig {
    fn from(dto: dto::IceServersResponseDto) -> Self {
        Self {
            ice_servers: dto
                .ice_servers
                .into_iter()
                .map(IceServer::from)
                .filter(|server| !server.urls.is_empty())
                .collect(),
        }
    }
}
