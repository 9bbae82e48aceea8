//! UseCase: クライアント接続処理
//!
//! 受け入れた接続に ConnectionId を払い出し、ブロードキャストグループに
//! 登録します。接続はワイヤ上の識別子を持たないため、重複チェックは
//! 存在しません（ID はサーバ側で生成され、常に一意）。

use std::sync::Arc;

use irori_shared::time::Clock;

use crate::domain::{BroadcastGroup, ClientInfo, ConnectionId, PusherChannel};

/// クライアント接続のユースケース
pub struct ConnectClientUseCase {
    /// BroadcastGroup（メンバーシップの抽象化）
    group: Arc<dyn BroadcastGroup>,
    /// Clock（接続時刻の打刻に使用）
    clock: Arc<dyn Clock>,
}

impl ConnectClientUseCase {
    /// 新しい ConnectClientUseCase を作成
    pub fn new(group: Arc<dyn BroadcastGroup>, clock: Arc<dyn Clock>) -> Self {
        Self { group, clock }
    }

    /// クライアント接続を実行
    ///
    /// # Arguments
    ///
    /// * `sender` - この接続へメッセージを送るためのチャンネル
    ///
    /// # Returns
    ///
    /// 払い出された `ConnectionId`
    pub async fn execute(&self, sender: PusherChannel) -> ConnectionId {
        let connection_id = ConnectionId::generate();
        let connected_at = self.clock.now_jst_millis();

        self.group
            .join(
                connection_id.clone(),
                ClientInfo {
                    sender,
                    connected_at,
                },
            )
            .await;

        tracing::info!(
            "connection '{}' joined group '{}' ({} member(s))",
            connection_id,
            self.group.name(),
            self.group.member_count().await
        );

        connection_id
    }
}
