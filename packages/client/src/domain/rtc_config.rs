//! Peer connection transport configuration (ICE servers).

use serde::{Deserialize, Serialize};

/// Public STUN server used when the configuration service gives nothing usable
pub const FALLBACK_STUN_URL: &str = "stun:stun.l.google.com:19302";

/// Single ICE server entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IceServer {
    pub urls: Vec<String>,
    pub username: Option<String>,
    pub credential: Option<String>,
}

impl IceServer {
    /// STUN server without credentials
    pub fn stun(url: impl Into<String>) -> Self {
        Self {
            urls: vec![url.into()],
            username: None,
            credential: None,
        }
    }
}

/// Configuration handed to the peer transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtcConfig {
    pub ice_servers: Vec<IceServer>,
}

impl RtcConfig {
    /// STUN-only configuration
    pub fn fallback() -> Self {
        Self {
            ice_servers: vec![IceServer::stun(FALLBACK_STUN_URL)],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ice_servers.is_empty()
    }
}

impl Default for RtcConfig {
    fn default() -> Self {
        Self::fallback()
    }
}
