//! Irori relay server library.
//!
//! A minimal real-time relay: clients hold persistent WebSocket
//! connections, inbound messages are rebroadcast to every other member of
//! the same group, and the chat group additionally keeps a bounded, durable
//! log of chat messages.
//!
//! Two independent broadcast groups exist:
//!
//! - `chat` (`/ws`): relays messages and persists well-formed chat events
//!   to a JSON snapshot file, served back via `/history`
//! - `signal` (`/signal`): pure ephemeral rebroadcast for
//!   connection-negotiation payloads, no persistence

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
