//! UI layer: axum router, WebSocket/HTTP handlers, and server lifecycle.

pub mod handler;
pub mod server;
pub mod shutdown;
pub mod state;

pub use server::Server;
