//! WebSocket 接続向けの BroadcastGroup 実装
//!
//! ## 責務
//!
//! - グループのメンバーシップ（ConnectionId → ClientInfo）を管理
//! - 送信者以外の全メンバーへのファンアウト配送
//! - 送信に失敗した接続のメンバーシップからの追い出し
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`src/ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `PusherChannel` を受け取り、配送に使用します。
//! メンバーシップは `tokio::sync::Mutex` で保護され、同一グループに対する
//! 並行した join / leave / broadcast が集合を壊さないことを保証します。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use irori_shared::time::get_jst_timestamp;

use crate::domain::{BroadcastGroup, ClientInfo, ConnectionId};

/// インメモリのブロードキャストグループ実装
///
/// グループごとに 1 インスタンスを生成します（`chat` と `signal` は
/// それぞれ独立したインスタンスを持ち、状態を共有しない）。
pub struct WebSocketBroadcastGroup {
    /// グループ名（`chat`, `signal`）
    name: String,
    /// 現在のメンバー
    ///
    /// Key: ConnectionId
    /// Value: ClientInfo
    members: Mutex<HashMap<ConnectionId, ClientInfo>>,
}

impl WebSocketBroadcastGroup {
    /// 新しい WebSocketBroadcastGroup を作成
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl BroadcastGroup for WebSocketBroadcastGroup {
    fn name(&self) -> &str {
        &self.name
    }

    async fn join(&self, connection_id: ConnectionId, client: ClientInfo) {
        let mut members = self.members.lock().await;
        members.insert(connection_id.clone(), client);
        tracing::debug!(
            "connection '{}' registered to group '{}' ({} member(s))",
            connection_id,
            self.name,
            members.len()
        );
    }

    async fn leave(&self, connection_id: &ConnectionId) -> bool {
        let mut members = self.members.lock().await;
        match members.remove(connection_id) {
            Some(client) => {
                let session_millis = get_jst_timestamp() - client.connected_at;
                tracing::debug!(
                    "connection '{}' unregistered from group '{}' after {} ms",
                    connection_id,
                    self.name,
                    session_millis
                );
                true
            }
            None => false,
        }
    }

    async fn broadcast(&self, sender_id: &ConnectionId, raw: &str) -> usize {
        let mut members = self.members.lock().await;

        let mut delivered = 0;
        let mut failed: Vec<ConnectionId> = Vec::new();
        for (connection_id, client) in members.iter() {
            if connection_id == sender_id {
                continue;
            }
            // 一部の送信失敗は他の受信者への配送を妨げない
            if client.sender.send(raw.to_string()).is_err() {
                failed.push(connection_id.clone());
            } else {
                delivered += 1;
            }
        }

        // 送信に失敗した接続はメンバーシップから追い出す
        for connection_id in &failed {
            members.remove(connection_id);
            tracing::warn!(
                "connection '{}' evicted from group '{}' after send failure",
                connection_id,
                self.name
            );
        }

        delivered
    }

    async fn member_count(&self) -> usize {
        let members = self.members.lock().await;
        members.len()
    }
}
