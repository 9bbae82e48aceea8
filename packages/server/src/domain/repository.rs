//! History Repository trait 定義
//!
//! ドメイン層が必要とする履歴ストアのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::error::PersistError;
use super::message::ChatMessage;

/// Durable, bounded log of chat messages.
///
/// `append` is write-through: the implementation persists the entire
/// trailing window synchronously on every mutation. A persistence failure
/// is reported to the caller but must leave the in-memory log intact so
/// the relay keeps functioning without durability.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// チャットメッセージを履歴に追加し、スナップショットを書き出す
    async fn append(&self, message: ChatMessage) -> Result<(), PersistError>;

    /// 現在のインメモリ履歴（上限適用済み）を挿入順で取得
    ///
    /// ストレージの再読み込みは行わない。
    async fn recent(&self) -> Vec<ChatMessage>;

    /// 保持しているメッセージ数を取得
    async fn len(&self) -> usize;
}
