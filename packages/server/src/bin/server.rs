//! WebSocket relay server with broadcast support and persistent chat history.
//!
//! Rebroadcasts each inbound message to all other connected clients of the
//! same group. Chat messages are additionally appended to a bounded history
//! file served via `/history`.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin irori-server
//! cargo run --bin irori-server -- --host 0.0.0.0 --port 3000
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use irori_server::{
    infrastructure::{broadcast::WebSocketBroadcastGroup, repository::FileHistoryRepository},
    ui::{Server, state::GroupUseCases},
    usecase::{
        ConnectClientUseCase, DisconnectClientUseCase, GetHistoryUseCase, RelayMessageUseCase,
    },
};
use irori_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "irori-server")]
#[command(about = "WebSocket relay server with persistent chat history", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// Path of the chat history snapshot file
    #[arg(long, default_value = "data/chat_history.json")]
    history_file: PathBuf,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Clock
    // 2. Broadcast groups (one per group name, fully independent)
    // 3. History repository (loads the persisted snapshot, or starts empty)
    // 4. UseCases per group
    // 5. Server

    // 1. Clock
    let clock = Arc::new(SystemClock);

    // 2. Broadcast groups
    let chat_group = Arc::new(WebSocketBroadcastGroup::new("chat"));
    let signal_group = Arc::new(WebSocketBroadcastGroup::new("signal"));

    // 3. History repository (chat group only)
    let history = Arc::new(FileHistoryRepository::load(args.history_file).await);

    // 4. UseCases
    let chat = Arc::new(GroupUseCases {
        name: "chat",
        connect_usecase: Arc::new(ConnectClientUseCase::new(chat_group.clone(), clock.clone())),
        disconnect_usecase: Arc::new(DisconnectClientUseCase::new(chat_group.clone())),
        relay_usecase: Arc::new(RelayMessageUseCase::with_history(
            chat_group.clone(),
            history.clone(),
        )),
    });
    let signal = Arc::new(GroupUseCases {
        name: "signal",
        connect_usecase: Arc::new(ConnectClientUseCase::new(
            signal_group.clone(),
            clock.clone(),
        )),
        disconnect_usecase: Arc::new(DisconnectClientUseCase::new(signal_group.clone())),
        relay_usecase: Arc::new(RelayMessageUseCase::new(signal_group.clone())),
    });
    let get_history_usecase = Arc::new(GetHistoryUseCase::new(history.clone()));

    // 5. Create and run the server
    let server = Server::new(chat, signal, get_history_usecase);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
