//! ICE configuration adapter (`GET /api/webrtc/ice-servers`).

use async_trait::async_trait;

use crate::{
    domain::{RtcConfig, RtcConfigError, RtcConfigSource},
    infrastructure::dto::http::IceServersResponseDto,
};

use super::endpoint;

/// RtcConfigSource backed by the room API
#[derive(Debug, Clone)]
pub struct HttpRtcConfigSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRtcConfigSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RtcConfigSource for HttpRtcConfigSource {
    async fn fetch_rtc_config(
        &self,
        user_number: u64,
        room_number: u64,
    ) -> Result<RtcConfig, RtcConfigError> {
        let url = endpoint(&self.base_url, "/api/webrtc/ice-servers");

        let response = self
            .client
            .get(&url)
            .query(&[("userId", user_number), ("roomId", room_number)])
            .send()
            .await
            .map_err(|e| RtcConfigError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| RtcConfigError::Request(e.to_string()))?;

        let body: IceServersResponseDto = response
            .json()
            .await
            .map_err(|e| RtcConfigError::InvalidPayload(e.to_string()))?;

        Ok(RtcConfig::from(body))
    }
}
