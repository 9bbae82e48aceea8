//! UseCase: チャット履歴取得処理
//!
//! クライアントが接続時に過去の履歴を取得するための読み取り専用操作。
//! 履歴はインメモリの上限付きウィンドウをそのまま返し、ストレージの
//! 再読み込みは行いません。

use std::sync::Arc;

use crate::domain::{ChatMessage, HistoryRepository};

/// チャット履歴取得のユースケース
pub struct GetHistoryUseCase {
    /// HistoryRepository（履歴の抽象化）
    history: Arc<dyn HistoryRepository>,
}

impl GetHistoryUseCase {
    /// 新しい GetHistoryUseCase を作成
    pub fn new(history: Arc<dyn HistoryRepository>) -> Self {
        Self { history }
    }

    /// 現在の履歴（上限適用済み、挿入順）を取得
    pub async fn execute(&self) -> Vec<ChatMessage> {
        self.history.recent().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::MockHistoryRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_history_returns_live_window() {
        // テスト項目: リポジトリの recent がそのまま返される
        // given (前提条件):
        let expected = vec![
            ChatMessage::new("alice", "hi", Some(json!(1))),
            ChatMessage::new("bob", "hello", None),
        ];
        let mut history = MockHistoryRepository::new();
        let returned = expected.clone();
        history
            .expect_recent()
            .times(1)
            .returning(move || returned.clone());
        let usecase = GetHistoryUseCase::new(Arc::new(history));

        // when (操作):
        let result = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn test_get_history_with_empty_log() {
        // テスト項目: 履歴が空の場合は空の配列が返される
        // given (前提条件):
        let mut history = MockHistoryRepository::new();
        history.expect_recent().times(1).returning(Vec::new);
        let usecase = GetHistoryUseCase::new(Arc::new(history));

        // when (操作):
        let result = usecase.execute().await;

        // then (期待する結果):
        assert!(result.is_empty());
    }
}
