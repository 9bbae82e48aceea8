//! 接続（コネクション）の Domain Model
//!
//! クライアント 1 接続を表す不透明なハンドルを定義します。
//! 接続はワイヤ上の識別子を持たず、サーバ内部でのみ `ConnectionId` で識別されます。

use tokio::sync::mpsc;
use uuid::Uuid;

/// Channel used to push outbound text frames to a single connection.
///
/// The receiving half is drained by the connection's pusher task in the UI
/// layer; a send error means the peer task is gone and the connection is
/// treated as dead.
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Opaque identifier for one live connection.
///
/// Generated server-side on accept. Never sent to clients; used only for
/// group membership bookkeeping and logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// 新しい ConnectionId を生成（UUID v4）
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Connection bookkeeping held by a broadcast group for each member.
pub struct ClientInfo {
    /// Outbound message channel for this connection
    pub sender: PusherChannel,
    /// Unix timestamp when the connection joined (in JST, milliseconds)
    pub connected_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_connection_ids_are_unique() {
        // テスト項目: 生成された ConnectionId が一意である
        // given (前提条件):

        // when (操作):
        let first = ConnectionId::generate();
        let second = ConnectionId::generate();

        // then (期待する結果):
        assert_ne!(first, second);
    }

    #[test]
    fn test_connection_id_display_is_stable() {
        // テスト項目: 同じ ConnectionId の表示文字列が安定している
        // given (前提条件):
        let id = ConnectionId::generate();

        // when (操作):
        let first = id.to_string();
        let second = id.to_string();

        // then (期待する結果):
        assert_eq!(first, second);
    }
}
