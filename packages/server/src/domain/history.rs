//! チャット履歴の Domain Model
//!
//! 上限付き追記ログ。挿入順を保持し、上限を超えた分は先頭（最古）から
//! 追い出します（FIFO eviction）。不変条件: どの操作の後でも
//! `len() <= capacity` が成り立つこと。

use std::collections::VecDeque;

use super::message::ChatMessage;

/// Maximum number of chat messages retained in history.
pub const HISTORY_MAX: usize = 500;

/// Bounded, insertion-ordered log of chat messages.
///
/// Pure in-memory entity; durability is the repository's concern.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    messages: VecDeque<ChatMessage>,
    capacity: usize,
}

impl HistoryLog {
    /// 新しい空の HistoryLog を作成（容量は `HISTORY_MAX`）
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_MAX)
    }

    /// 容量を指定して HistoryLog を作成（テスト用途）
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            messages: VecDeque::new(),
            capacity,
        }
    }

    /// Build a log from previously persisted messages.
    ///
    /// Keeps only the trailing `HISTORY_MAX` window when the snapshot is
    /// larger than the bound (e.g. a file written by an older build with a
    /// higher limit).
    pub fn from_messages(messages: Vec<ChatMessage>) -> Self {
        let mut log = Self::new();
        for message in messages {
            log.append(message);
        }
        log
    }

    /// メッセージを末尾に追加し、上限を超えた分を先頭から追い出す
    ///
    /// # Returns
    ///
    /// 追い出されたメッセージ数
    pub fn append(&mut self, message: ChatMessage) -> usize {
        self.messages.push_back(message);
        let mut evicted = 0;
        while self.messages.len() > self.capacity {
            self.messages.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// 現在の履歴全体（上限適用済み）を挿入順で返す
    pub fn recent(&self) -> Vec<ChatMessage> {
        self.messages.iter().cloned().collect()
    }

    /// 保持しているメッセージへの参照（スナップショット書き出し用）
    pub fn messages(&self) -> &VecDeque<ChatMessage> {
        &self.messages
    }

    /// 保持しているメッセージ数
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// 履歴が空かどうか
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}
