//! Member list adapter (`GET /api/rooms/{roomId}/members`).

use async_trait::async_trait;

use crate::{
    domain::{MemberSource, MemberSourceError, PolledMember},
    infrastructure::dto::http::MemberDto,
};

use super::endpoint;

/// MemberSource backed by the room API
#[derive(Debug, Clone)]
pub struct HttpMemberSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMemberSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl MemberSource for HttpMemberSource {
    async fn fetch_members(
        &self,
        room_number: u64,
    ) -> Result<Vec<PolledMember>, MemberSourceError> {
        let url = endpoint(&self.base_url, &format!("/api/rooms/{}/members", room_number));
        let fetch_error = |reason: String| MemberSourceError::Fetch {
            room: room_number,
            reason,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?
            .error_for_status()
            .map_err(|e| fetch_error(e.to_string()))?;

        let members: Vec<MemberDto> = response
            .json()
            .await
            .map_err(|e| MemberSourceError::InvalidPayload(e.to_string()))?;

        Ok(members.into_iter().map(PolledMember::from).collect())
    }
}
