//! UseCase: オファー送信
//!
//! ローカルのトラックが接続に付くまで少し待ってからオファーを送る。
//! 失敗した場合は一定時間待って 1 回だけ再送し、それでも失敗したら
//! ログに残して結果を返す（それ以上は再送しない）。

use std::{sync::Arc, time::Duration};

use crate::domain::{MemberId, PeerTransport, TransportError};

/// Attempts per offer (first try + one retry)
pub const MAX_OFFER_ATTEMPTS: u32 = 2;

/// Result of a bounded offer attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfferOutcome {
    /// The transport accepted the offer
    Sent { attempts: u32 },
    /// Every attempt failed; `error` is the last failure
    Failed { attempts: u32, error: TransportError },
}

impl OfferOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}

/// オファー送信のユースケース
pub struct SendOfferUseCase {
    transport: Arc<dyn PeerTransport>,
    /// 最初の送信までの待ち時間（トラック付与の猶予）
    offer_delay: Duration,
    /// 失敗から再送までの待ち時間
    retry_delay: Duration,
}

impl SendOfferUseCase {
    pub fn new(
        transport: Arc<dyn PeerTransport>,
        offer_delay: Duration,
        retry_delay: Duration,
    ) -> Self {
        Self {
            transport,
            offer_delay,
            retry_delay,
        }
    }

    /// オファー送信を実行
    ///
    /// # Arguments
    ///
    /// * `peer` - 送信先の MemberId
    ///
    /// # Returns
    ///
    /// * `OfferOutcome::Sent` - いずれかの試行で成功
    /// * `OfferOutcome::Failed` - 全ての試行が失敗
    pub async fn execute(&self, peer: &MemberId) -> OfferOutcome {
        tokio::time::sleep(self.offer_delay).await;

        let mut attempt = 1;
        loop {
            match self.transport.call_user(peer).await {
                Ok(()) => {
                    tracing::debug!("offer sent to {} (attempt {})", peer, attempt);
                    return OfferOutcome::Sent { attempts: attempt };
                }
                Err(e) if attempt < MAX_OFFER_ATTEMPTS => {
                    tracing::warn!("call_user({}) failed, retrying: {}", peer, e);
                    tokio::time::sleep(self.retry_delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::warn!("call_user({}) retry failed, giving up: {}", peer, e);
                    return OfferOutcome::Failed {
                        attempts: attempt,
                        error: e,
                    };
                }
            }
        }
    }
}
