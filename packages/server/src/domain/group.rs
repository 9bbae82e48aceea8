//! Broadcast Group trait 定義
//!
//! ドメイン層が必要とするブロードキャストグループのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! グループはグループ名（`chat`, `signal`）だけで識別され、1 つの接続は同時に
//! 1 つのグループにのみ所属します。2 つのグループは完全に独立しており、
//! グループ間の調整は存在しません。

use async_trait::async_trait;

use super::connection::{ClientInfo, ConnectionId};

/// Named set of live connections with a relay-to-others-on-receive policy.
///
/// All operations must be safe to call concurrently on the same group.
#[async_trait]
pub trait BroadcastGroup: Send + Sync {
    /// このグループのグループ名
    fn name(&self) -> &str;

    /// 接続をグループに登録
    async fn join(&self, connection_id: ConnectionId, client: ClientInfo);

    /// 接続をグループから削除（冪等）
    ///
    /// # Returns
    ///
    /// 削除前にメンバーだった場合は `true`。存在しない接続の削除は
    /// no-op で `false` を返す（エラーにはならない）。
    async fn leave(&self, connection_id: &ConnectionId) -> bool;

    /// 送信者以外の全メンバーに生ペイロードを配送
    ///
    /// 配送は受信者ごとの fire-and-forget: 一部の送信失敗は他の受信者への
    /// 配送を妨げず、失敗した接続はメンバーシップから追い出される
    /// (self-healing)。
    ///
    /// # Returns
    ///
    /// 配送に成功したメンバー数
    async fn broadcast(&self, sender_id: &ConnectionId, raw: &str) -> usize;

    /// 現在のメンバー数
    async fn member_count(&self) -> usize;
}
