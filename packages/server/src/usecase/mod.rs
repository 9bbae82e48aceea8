//! UseCase layer: one struct per application operation.
//!
//! UseCase は `Arc<dyn Trait>` 経由でドメインのインターフェースにのみ依存し、
//! Infrastructure 層の具体的な実装には依存しません。

pub mod connect_client;
pub mod disconnect_client;
pub mod get_history;
pub mod relay_message;

pub use connect_client::ConnectClientUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use get_history::GetHistoryUseCase;
pub use relay_message::{PersistOutcome, RelayMessageUseCase, RelayReport};
