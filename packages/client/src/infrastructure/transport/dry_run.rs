//! ログだけを出す PeerTransport 実装
//!
//! ## 責務
//!
//! - 適用された ICE 設定とローカルストリームを保持
//! - `call_user` の呼び出しを記録してログに出す
//!
//! ## 設計ノート
//!
//! シグナリングとピア接続の実体はこのクレートの外にある。ヘッドレス実行では
//! どのピアにいつオファーが送られるかだけを確認できればよいので、この実装は
//! 接続を張らず、受信ストリームも持たない。

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    MediaStreamHandle, MemberId, PeerTransport, RemoteStreams, RtcConfig, TransportError,
};

/// 接続を張らない PeerTransport
#[derive(Debug, Default)]
pub struct DryRunPeerTransport {
    /// 最後に適用された ICE 設定
    config: Mutex<Option<RtcConfig>>,
    /// 送信側に付与されたローカルストリーム
    local_stream: Mutex<Option<MediaStreamHandle>>,
    /// オファーを送った相手（呼び出し順）
    calls: Mutex<Vec<MemberId>>,
}

impl DryRunPeerTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// これまでにオファーを送った相手
    pub async fn calls(&self) -> Vec<MemberId> {
        self.calls.lock().await.clone()
    }

    /// 現在の ICE 設定
    pub async fn config(&self) -> Option<RtcConfig> {
        self.config.lock().await.clone()
    }
}

#[async_trait]
impl PeerTransport for DryRunPeerTransport {
    async fn apply_config(&self, config: &RtcConfig) {
        tracing::info!("ice servers: {:?}", config.ice_servers);
        *self.config.lock().await = Some(config.clone());
    }

    async fn attach_local_stream(&self, stream: &MediaStreamHandle) {
        tracing::debug!("local stream '{}' attached", stream.id);
        *self.local_stream.lock().await = Some(stream.clone());
    }

    async fn call_user(&self, peer: &MemberId) -> Result<(), TransportError> {
        if self.local_stream.lock().await.is_none() {
            return Err(TransportError::LocalStreamMissing);
        }
        tracing::info!("offer -> {}", peer);
        self.calls.lock().await.push(peer.clone());
        Ok(())
    }

    async fn remote_streams(&self) -> RemoteStreams {
        RemoteStreams::new()
    }
}
