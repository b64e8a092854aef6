//! Domain error types.

use list_store::ListStoreError;
use thiserror::Error;

use crate::invitation::ListError;

/// Errors that can occur during command orchestration.
///
/// Wraps the underlying cause rather than collapsing it: callers can still
/// match on the precise business kind or the store fault.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The aggregate or an entity rejected the command.
    #[error("invitation list error: {0}")]
    List(#[from] ListError),

    /// The snapshot store failed or refused a stale write.
    #[error("list store error: {0}")]
    Store(#[from] ListStoreError),
}
