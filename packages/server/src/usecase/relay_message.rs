//! UseCase: メッセージ中継処理
//!
//! 受信した生ペイロードを分類し、チャットイベントであれば履歴に永続化した
//! うえで、送信者以外の全メンバーへ中継します。シグナリンググループのように
//! 履歴を持たないグループでは、分類と永続化をスキップして中継のみ行います。
//!
//! ## 不変条件
//!
//! - 中継されるペイロードは常に受信した生テキストそのもの。分類結果
//!   （Chat / Opaque）も永続化の成否も、中継内容には一切影響しない
//! - 永続化は中継より先に、同期的に行われる（write-through）
//! - このユースケースは決して失敗しない。呼び出し元は `RelayReport` で
//!   配送数と永続化の結果を観測する

use std::sync::Arc;

use crate::domain::{
    BroadcastGroup, ConnectionId, HistoryRepository, InboundPayload, PersistError,
    classify_payload,
};

/// 1 回の中継で永続化がどう扱われたか
#[derive(Debug)]
pub enum PersistOutcome {
    /// チャットイベントとして履歴に保存された
    Stored,
    /// Opaque ペイロードのため保存対象外
    Skipped,
    /// 保存を試みたが失敗した（中継は継続している）
    Failed(PersistError),
    /// このグループは履歴を持たない
    Disabled,
}

/// 1 回の中継の結果
#[derive(Debug)]
pub struct RelayReport {
    /// 配送に成功したメンバー数
    pub delivered: usize,
    /// 永続化の結果
    pub persist: PersistOutcome,
}

/// メッセージ中継のユースケース
///
/// グループごとに 1 インスタンスを生成します。チャットグループは
/// `with_history` で、シグナリンググループは `new` で構築します。
pub struct RelayMessageUseCase {
    /// BroadcastGroup（ファンアウトの抽象化）
    group: Arc<dyn BroadcastGroup>,
    /// HistoryRepository（履歴の抽象化）。`None` のグループは中継のみ
    history: Option<Arc<dyn HistoryRepository>>,
}

impl RelayMessageUseCase {
    /// 履歴を持たないグループ向けの RelayMessageUseCase を作成
    pub fn new(group: Arc<dyn BroadcastGroup>) -> Self {
        Self {
            group,
            history: None,
        }
    }

    /// 履歴つきグループ向けの RelayMessageUseCase を作成
    pub fn with_history(
        group: Arc<dyn BroadcastGroup>,
        history: Arc<dyn HistoryRepository>,
    ) -> Self {
        Self {
            group,
            history: Some(history),
        }
    }

    /// メッセージ中継を実行
    ///
    /// # Arguments
    ///
    /// * `sender_id` - 送信元の接続 ID（この接続には配送されない）
    /// * `raw` - 受信した生テキスト。このまま中継される
    pub async fn execute(&self, sender_id: &ConnectionId, raw: &str) -> RelayReport {
        // 1. 分類と永続化（履歴を持つグループのみ）
        let persist = match &self.history {
            None => PersistOutcome::Disabled,
            Some(history) => match classify_payload(raw) {
                InboundPayload::Opaque => PersistOutcome::Skipped,
                InboundPayload::Chat(message) => match history.append(message).await {
                    Ok(()) => PersistOutcome::Stored,
                    Err(e) => PersistOutcome::Failed(e),
                },
            },
        };

        // 2. 送信者以外へ生ペイロードを中継
        let delivered = self.group.broadcast(sender_id, raw).await;
        tracing::debug!(
            "relayed {} byte(s) from '{}' to {} member(s) of group '{}'",
            raw.len(),
            sender_id,
            delivered,
            self.group.name()
        );

        RelayReport { delivered, persist }
    }
}
