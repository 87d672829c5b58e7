//! UseCase: 参加者リストの同期
//!
//! API から参加者をポーリングし、画面表示用の Member に変換する。
//! 自分がリストにいなければスナップショット（なければプレースホルダ）で補う。

use std::sync::Arc;

use crate::domain::{
    Member, MemberId, MemberSource, MemberSourceError, roster::live_members,
};

/// 参加者リスト同期のユースケース
pub struct SyncRosterUseCase {
    source: Arc<dyn MemberSource>,
}

impl SyncRosterUseCase {
    pub fn new(source: Arc<dyn MemberSource>) -> Self {
        Self { source }
    }

    /// ライブの参加者リストを取得
    ///
    /// # Arguments
    ///
    /// * `room_number` - 部屋番号
    /// * `self_id` - 自分の MemberId（未確定なら None）
    /// * `snapshot` - 入室時のスナップショットの参加者
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Member>)` - ライブの参加者（自分を含む）
    /// * `Err(MemberSourceError)` - 取得失敗
    pub async fn execute(
        &self,
        room_number: u64,
        self_id: Option<&MemberId>,
        snapshot: &[Member],
    ) -> Result<Vec<Member>, MemberSourceError> {
        let polled = self.source.fetch_members(room_number).await?;
        let members = live_members(&polled, self_id, snapshot);

        tracing::debug!(
            "live members: [{}]",
            members
                .iter()
                .map(|m| if m.is_me { format!("{}(me)", m.id) } else { m.id.to_string() })
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(members)
    }
}
