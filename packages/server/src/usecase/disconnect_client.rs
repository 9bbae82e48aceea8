//! UseCase: クライアント切断処理
//!
//! 接続のタスクが終了したとき（切断検知・回復不能な送受信エラー）に必ず
//! 呼ばれ、グループからメンバーシップを取り除きます。leave は冪等であり、
//! ブロードキャスト中の追い出しと競合しても安全です（二重削除は no-op）。

use std::sync::Arc;

use crate::domain::{BroadcastGroup, ConnectionId};

/// クライアント切断のユースケース
pub struct DisconnectClientUseCase {
    /// BroadcastGroup（メンバーシップの抽象化）
    group: Arc<dyn BroadcastGroup>,
}

impl DisconnectClientUseCase {
    /// 新しい DisconnectClientUseCase を作成
    pub fn new(group: Arc<dyn BroadcastGroup>) -> Self {
        Self { group }
    }

    /// クライアント切断を実行
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 切断する接続の ID
    ///
    /// # Returns
    ///
    /// 削除前にメンバーだった場合は `true`（すでに追い出されていた場合は `false`）
    pub async fn execute(&self, connection_id: &ConnectionId) -> bool {
        let was_member = self.group.leave(connection_id).await;

        if was_member {
            tracing::info!(
                "connection '{}' left group '{}' ({} member(s) remaining)",
                connection_id,
                self.group.name(),
                self.group.member_count().await
            );
        } else {
            // 送信失敗による追い出しと切断検知が重なった場合など
            tracing::debug!(
                "connection '{}' was already absent from group '{}'",
                connection_id,
                self.group.name()
            );
        }

        was_member
    }
}
