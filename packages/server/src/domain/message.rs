//! チャットメッセージの Domain Model とメッセージ分類
//!
//! 受信した生テキストが「永続化すべきチャットイベント」かどうかを判定します。
//! 分類は永続化のためだけに使われ、リレーされるペイロードには一切影響しません
//! （不正な形のチャットオブジェクトであっても、受信したバイト列のまま中継される）。

use serde::{Deserialize, Serialize};

/// Message type tag for persisted chat messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    #[serde(rename = "chat")]
    Chat,
}

/// A chat message as it is persisted and served from `/history`.
///
/// Wire format: `{"type":"chat","from":...,"text":...,"ts":...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub r#type: MessageType,
    pub from: String,
    pub text: String,
    /// Client-supplied timestamp. Passed through untouched; may be null.
    #[serde(default)]
    pub ts: Option<serde_json::Value>,
}

impl ChatMessage {
    /// 新しい ChatMessage を作成
    pub fn new(from: impl Into<String>, text: impl Into<String>, ts: Option<serde_json::Value>) -> Self {
        Self {
            r#type: MessageType::Chat,
            from: from.into(),
            text: text.into(),
            ts,
        }
    }
}

/// Classification result for one inbound raw payload.
///
/// `Opaque` covers everything that is not a well-formed chat event:
/// malformed JSON, non-object JSON, and objects whose `type` is not
/// `"chat"`. Opaque payloads are relayed but never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundPayload {
    /// 永続化対象のチャットイベント（正規化済み）
    Chat(ChatMessage),
    /// リレーのみ（永続化しない）
    Opaque,
}

/// Classify one inbound raw text payload.
///
/// Decode failure is an expected, common case (signaling payloads, plain
/// text) and classifies as `Opaque`. On a successful decode of an object
/// with `type == "chat"`, the persisted representation is normalized:
/// `from` defaults to `"guest"` when absent or not a string, `text`
/// defaults to the empty string, and `ts` is passed through as-is
/// (null when absent).
pub fn classify_payload(raw: &str) -> InboundPayload {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => return InboundPayload::Opaque,
    };

    let Some(payload) = value.as_object() else {
        return InboundPayload::Opaque;
    };

    if payload.get("type").and_then(|v| v.as_str()) != Some("chat") {
        return InboundPayload::Opaque;
    }

    let from = payload
        .get("from")
        .and_then(|v| v.as_str())
        .unwrap_or("guest");
    let text = payload.get("text").and_then(|v| v.as_str()).unwrap_or("");
    let ts = payload.get("ts").filter(|v| !v.is_null()).cloned();

    InboundPayload::Chat(ChatMessage::new(from, text, ts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_well_formed_chat_payload() {
        // テスト項目: 正しい形のチャットペイロードが Chat に分類される
        // given (前提条件):
        let raw = r#"{"type":"chat","from":"alice","text":"hi","ts":1}"#;

        // when (操作):
        let result = classify_payload(raw);

        // then (期待する結果):
        let expected = ChatMessage::new("alice", "hi", Some(json!(1)));
        assert_eq!(result, InboundPayload::Chat(expected));
    }

    #[test]
    fn test_classify_malformed_json_as_opaque() {
        // テスト項目: 不正な JSON が Opaque に分類される
        // given (前提条件):
        let raw = r#"{"type":"chat""#;

        // when (操作):
        let result = classify_payload(raw);

        // then (期待する結果):
        assert_eq!(result, InboundPayload::Opaque);
    }

    #[test]
    fn test_classify_plain_text_as_opaque() {
        // テスト項目: プレーンテキスト（シグナリング用途）が Opaque に分類される
        // given (前提条件):
        let raw = "ping";

        // when (操作):
        let result = classify_payload(raw);

        // then (期待する結果):
        assert_eq!(result, InboundPayload::Opaque);
    }

    #[test]
    fn test_classify_non_chat_type_as_opaque() {
        // テスト項目: type が "chat" 以外のオブジェクトが Opaque に分類される
        // given (前提条件):
        let raw = r#"{"type":"offer","sdp":"v=0"}"#;

        // when (操作):
        let result = classify_payload(raw);

        // then (期待する結果):
        assert_eq!(result, InboundPayload::Opaque);
    }

    #[test]
    fn test_classify_non_object_json_as_opaque() {
        // テスト項目: オブジェクトでない JSON（配列・数値）が Opaque に分類される
        // given (前提条件):

        // when (操作):
        let array = classify_payload(r#"["type","chat"]"#);
        let number = classify_payload("42");

        // then (期待する結果):
        assert_eq!(array, InboundPayload::Opaque);
        assert_eq!(number, InboundPayload::Opaque);
    }

    #[test]
    fn test_classify_defaults_missing_fields() {
        // テスト項目: from / text / ts が欠けていてもデフォルト値で正規化される
        // given (前提条件):
        let raw = r#"{"type":"chat"}"#;

        // when (操作):
        let result = classify_payload(raw);

        // then (期待する結果):
        let expected = ChatMessage::new("guest", "", None);
        assert_eq!(result, InboundPayload::Chat(expected));
    }

    #[test]
    fn test_classify_defaults_wrong_shaped_from() {
        // テスト項目: from が文字列でない場合は "guest" に正規化される
        // given (前提条件):
        let raw = r#"{"type":"chat","from":123,"text":"hello"}"#;

        // when (操作):
        let result = classify_payload(raw);

        // then (期待する結果):
        let expected = ChatMessage::new("guest", "hello", None);
        assert_eq!(result, InboundPayload::Chat(expected));
    }

    #[test]
    fn test_classify_null_ts_is_normalized_to_none() {
        // テスト項目: ts が null の場合は None として扱われる
        // given (前提条件):
        let raw = r#"{"type":"chat","from":"bob","text":"yo","ts":null}"#;

        // when (操作):
        let result = classify_payload(raw);

        // then (期待する結果):
        let expected = ChatMessage::new("bob", "yo", None);
        assert_eq!(result, InboundPayload::Chat(expected));
    }

    #[test]
    fn test_chat_message_serializes_to_wire_format() {
        // テスト項目: ChatMessage が仕様通りのワイヤフォーマットにシリアライズされる
        // given (前提条件):
        let message = ChatMessage::new("alice", "hi", Some(json!(1)));

        // when (操作):
        let serialized = serde_json::to_string(&message).unwrap();

        // then (期待する結果):
        assert_eq!(
            serialized,
            r#"{"type":"chat","from":"alice","text":"hi","ts":1}"#
        );
    }

    #[test]
    fn test_chat_message_serializes_missing_ts_as_null() {
        // テスト項目: ts が無い場合は null としてシリアライズされる
        // given (前提条件):
        let message = ChatMessage::new("guest", "", None);

        // when (操作):
        let serialized = serde_json::to_string(&message).unwrap();

        // then (期待する結果):
        assert_eq!(serialized, r#"{"type":"chat","from":"guest","text":"","ts":null}"#);
    }

    #[test]
    fn test_chat_message_round_trips_through_json() {
        // テスト項目: ChatMessage が JSON を介してラウンドトリップできる
        // given (前提条件):
        let message = ChatMessage::new("alice", "hi", Some(json!(1700000000000i64)));

        // when (操作):
        let serialized = serde_json::to_string(&message).unwrap();
        let deserialized: ChatMessage = serde_json::from_str(&serialized).unwrap();

        // then (期待する結果):
        assert_eq!(deserialized, message);
    }
}
