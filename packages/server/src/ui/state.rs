//! Server state shared across request handlers.

use std::sync::Arc;

use crate::usecase::{
    ConnectClientUseCase, DisconnectClientUseCase, GetHistoryUseCase, RelayMessageUseCase,
};

/// UseCases wired to one broadcast group.
///
/// `chat` と `signal` はこの構造体の独立したインスタンスを持ち、
/// グループ間で状態を共有しません。
pub struct GroupUseCases {
    /// グループ名（ログ用）
    pub name: &'static str,
    /// ConnectClientUseCase（クライアント接続のユースケース）
    pub connect_usecase: Arc<ConnectClientUseCase>,
    /// DisconnectClientUseCase（クライアント切断のユースケース）
    pub disconnect_usecase: Arc<DisconnectClientUseCase>,
    /// RelayMessageUseCase（メッセージ中継のユースケース）
    pub relay_usecase: Arc<RelayMessageUseCase>,
}

/// Shared application state
pub struct AppState {
    /// チャットグループ（履歴つき）
    pub chat: Arc<GroupUseCases>,
    /// シグナリンググループ（中継のみ）
    pub signal: Arc<GroupUseCases>,
    /// GetHistoryUseCase（チャット履歴取得のユースケース）
    pub get_history_usecase: Arc<GetHistoryUseCase>,
}
