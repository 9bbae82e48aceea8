//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::ui::state::{AppState, GroupUseCases};
use crate::usecase::PersistOutcome;

/// WebSocket endpoint for the chat group (`/ws`).
pub async fn chat_websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let group = state.chat.clone();
    ws.on_upgrade(move |socket| handle_socket(socket, group))
}

/// WebSocket endpoint for the signaling group (`/signal`).
pub async fn signal_websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let group = state.signal.clone();
    ws.on_upgrade(move |socket| handle_socket(socket, group))
}

/// Spawns a task that receives messages from the rx channel and pushes them
/// to the WebSocket sender.
///
/// This function handles the outbound message flow: messages relayed from
/// other connections (via rx channel) are sent to this connection's
/// WebSocket. A send error means the transport is gone and the task ends.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            // Send the message to this connection
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, group: Arc<GroupUseCases>) {
    let (sender, mut receiver) = socket.split();

    // Create a channel for this connection to receive relayed messages
    let (tx, rx) = mpsc::unbounded_channel();

    // Join the broadcast group
    let connection_id = group.connect_usecase.execute(tx).await;

    // Spawn a task to push relayed messages to this connection
    let mut send_task = pusher_loop(rx, sender);

    let group_clone = group.clone();
    let connection_id_clone = connection_id.clone();

    // Spawn a task to receive messages from this connection
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::debug!(
                        "websocket error on connection '{}': {}",
                        connection_id_clone,
                        e
                    );
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    let report = group_clone
                        .relay_usecase
                        .execute(&connection_id_clone, &text)
                        .await;

                    // 永続化失敗はリレーを止めない。ここで観測してログに残すだけ
                    if let PersistOutcome::Failed(e) = report.persist {
                        tracing::warn!(
                            "failed to persist chat message from connection '{}': {}",
                            connection_id_clone,
                            e
                        );
                    }
                }
                Message::Ping(_) => {
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::debug!("connection '{}' requested close", connection_id_clone);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Leave the group. Always runs on task termination, so no membership
    // entry outlives its connection.
    group.disconnect_usecase.execute(&connection_id).await;
}
