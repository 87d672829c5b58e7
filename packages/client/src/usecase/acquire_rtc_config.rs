//! UseCase: ICE 設定の取得
//!
//! 設定サービスから ICE サーバを取得する。失敗した場合や空の結果だった場合は
//! 公開 STUN サーバ 1 つだけのフォールバック設定を使う。メディアの立ち上げを
//! 止めることはない。

use std::sync::Arc;

use crate::domain::{MemberId, RtcConfig, RtcConfigSource};

/// ICE 設定取得のユースケース
pub struct AcquireRtcConfigUseCase {
    source: Arc<dyn RtcConfigSource>,
}

impl AcquireRtcConfigUseCase {
    pub fn new(source: Arc<dyn RtcConfigSource>) -> Self {
        Self { source }
    }

    /// ICE 設定を取得する
    ///
    /// # Arguments
    ///
    /// * `me` - 自分の MemberId（数値部分が取れなければ 0 で問い合わせる）
    /// * `room_number` - 部屋番号
    ///
    /// # Returns
    ///
    /// 取得した設定、またはフォールバック設定
    pub async fn execute(&self, me: &MemberId, room_number: u64) -> RtcConfig {
        let user_number = me.user_number().unwrap_or(0);

        match self.source.fetch_rtc_config(user_number, room_number).await {
            Ok(config) if !config.is_empty() => {
                tracing::debug!("rtc config: {:?}", config.ice_servers);
                config
            }
            Ok(_) => {
                tracing::debug!("rtc config is empty, using fallback STUN only");
                RtcConfig::fallback()
            }
            Err(e) => {
                tracing::warn!("rtc config fetch failed, fallback to STUN only: {}", e);
                RtcConfig::fallback()
            }
        }
    }
}
