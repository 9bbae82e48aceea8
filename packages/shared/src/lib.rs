//! Shared utilities for the Irori relay server.
//!
//! Cross-cutting concerns used by every binary in the workspace:
//! logging setup and time/clock abstraction.

pub mod logger;
pub mod time;
