//! JSON スナップショットファイルを使った HistoryRepository 実装
//!
//! ## 永続化フォーマット
//!
//! メッセージオブジェクトの JSON 配列 1 本（挿入順、末尾 `HISTORY_MAX` 件）。
//! 追記ごとにスナップショット全体を上書きします（write-through）。想定される
//! チャット流量では書き込み増幅より単純さと耐久性を優先します。
//!
//! ## 失敗時の挙動
//!
//! - 読み込み: ファイル欠如・破損・読み込みエラーはすべて空の履歴に
//!   フォールバックし、プロセス起動を失敗させない
//! - 書き込み: エラーは呼び出し元に `PersistError` として返すが、
//!   インメモリの履歴はそのまま維持される（リレーは継続する）

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ChatMessage, HistoryLog, HistoryRepository, PersistError};

/// ファイルベースの HistoryRepository 実装
///
/// インメモリの `HistoryLog` を保持し、変更のたびにスナップショットを
/// ファイルへ書き出します。
pub struct FileHistoryRepository {
    /// インメモリ履歴（上限適用済み）
    log: Mutex<HistoryLog>,
    /// スナップショットファイルのパス
    path: PathBuf,
}

impl FileHistoryRepository {
    /// 永続化済みスナップショットを読み込んで FileHistoryRepository を作成
    ///
    /// ファイルが存在しない・内容がパースできない・読み込みに失敗した場合は
    /// 空の履歴で初期化します。親ディレクトリが無ければ作成を試みます。
    pub async fn load(path: PathBuf) -> Self {
        if let Some(parent) = path.parent() {
            if let Err(e) = tokio::fs::create_dir_all(parent).await {
                tracing::warn!(
                    "failed to create history directory '{}': {}",
                    parent.display(),
                    e
                );
            }
        }

        let log = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str::<Vec<ChatMessage>>(&raw) {
                Ok(messages) => {
                    let log = HistoryLog::from_messages(messages);
                    tracing::info!(
                        "loaded {} chat message(s) from '{}'",
                        log.len(),
                        path.display()
                    );
                    log
                }
                Err(e) => {
                    tracing::warn!(
                        "history file '{}' is unparseable, starting with empty history: {}",
                        path.display(),
                        e
                    );
                    HistoryLog::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    "no history file at '{}', starting with empty history",
                    path.display()
                );
                HistoryLog::new()
            }
            Err(e) => {
                tracing::warn!(
                    "failed to read history file '{}', starting with empty history: {}",
                    path.display(),
                    e
                );
                HistoryLog::new()
            }
        };

        Self {
            log: Mutex::new(log),
            path,
        }
    }
}

#[async_trait]
impl HistoryRepository for FileHistoryRepository {
    async fn append(&self, message: ChatMessage) -> Result<(), PersistError> {
        // スナップショットの書き出し順序を追記順と一致させるため、
        // 書き込み完了までロックを保持する（write-through）
        let mut log = self.log.lock().await;
        log.append(message);
        let snapshot = serde_json::to_string(log.messages())?;
        tokio::fs::write(&self.path, snapshot).await?;
        tracing::debug!(
            "persisted history snapshot ({} message(s)) to '{}'",
            log.len(),
            self.path.display()
        );
        Ok(())
    }

    async fn recent(&self) -> Vec<ChatMessage> {
        let log = self.log.lock().await;
        log.recent()
    }

    async fn len(&self) -> usize {
        let log = self.log.lock().await;
        log.len()
    }
}
