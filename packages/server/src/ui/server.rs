//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::usecase::GetHistoryUseCase;

use super::{
    handler::{
        http::{get_history, health_check},
        websocket::{chat_websocket_handler, signal_websocket_handler},
    },
    shutdown::shutdown_signal,
    state::{AppState, GroupUseCases},
};

/// WebSocket relay server
///
/// This struct encapsulates the server configuration and provides methods to run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(chat, signal, get_history_usecase);
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    /// チャットグループ（履歴つき）
    chat: Arc<GroupUseCases>,
    /// シグナリンググループ（中継のみ）
    signal: Arc<GroupUseCases>,
    /// GetHistoryUseCase（チャット履歴取得のユースケース）
    get_history_usecase: Arc<GetHistoryUseCase>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(
        chat: Arc<GroupUseCases>,
        signal: Arc<GroupUseCases>,
        get_history_usecase: Arc<GetHistoryUseCase>,
    ) -> Self {
        Self {
            chat,
            signal,
            get_history_usecase,
        }
    }

    /// Build the axum router for this server.
    ///
    /// Exposed separately from [`Server::run`] so integration tests can bind
    /// to an ephemeral port.
    pub fn into_router(self) -> Router {
        let app_state = Arc::new(AppState {
            chat: self.chat,
            signal: self.signal,
            get_history_usecase: self.get_history_usecase,
        });

        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(chat_websocket_handler))
            .route("/signal", get(signal_websocket_handler))
            // HTTP エンドポイント
            .route("/history", get(get_history))
            .route("/api/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(app_state)
    }

    /// Run the WebSocket relay server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.into_router();

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!(
            "WebSocket relay server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Chat endpoint: ws://{}/ws", bind_addr);
        tracing::info!("Signaling endpoint: ws://{}/signal", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
