//! Domain error types.

use thiserror::Error;

/// Errors raised while persisting the history snapshot.
///
/// Persistence failures are never fatal to the relay: callers observe the
/// error through [`PersistOutcome`](crate::usecase::PersistOutcome), log
/// it, and keep serving.
#[derive(Debug, Error)]
pub enum PersistError {
    /// スナップショットのエンコードに失敗
    #[error("failed to encode history snapshot: {0}")]
    Encode(#[from] serde_json::Error),
    /// スナップショットの書き込みに失敗
    #[error("failed to write history snapshot: {0}")]
    Io(#[from] std::io::Error),
}
