//! Domain layer: value objects, entities, classification logic, and the
//! traits (ports) the use cases depend on.

pub mod connection;
pub mod error;
pub mod group;
pub mod history;
pub mod message;
pub mod repository;

pub use connection::{ClientInfo, ConnectionId, PusherChannel};
pub use error::PersistError;
pub use group::BroadcastGroup;
pub use history::{HISTORY_MAX, HistoryLog};
pub use message::{ChatMessage, InboundPayload, MessageType, classify_payload};
pub use repository::HistoryRepository;
