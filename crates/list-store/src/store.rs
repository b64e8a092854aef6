use async_trait::async_trait;

use crate::{ListSnapshot, Result, Version};

/// Core trait for invitation list snapshot stores.
///
/// The invitation list is persisted as one whole-aggregate snapshot per save.
/// Commands load the current snapshot, transform it, and save it back; the
/// version carried by the snapshot makes the load-mutate-save cycle safe under
/// concurrent commands. All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Loads the current snapshot.
    ///
    /// Returns `ListSnapshot::empty()` (at the initial version) when nothing
    /// has been persisted yet.
    async fn find(&self) -> Result<ListSnapshot>;

    /// Persists a snapshot, households then guests.
    ///
    /// Fails with [`ListStoreError::VersionConflict`] when `snapshot.version`
    /// does not match the stored version, i.e. a concurrent command saved
    /// since this snapshot was loaded. Returns the new stored version.
    ///
    /// [`ListStoreError::VersionConflict`]: crate::ListStoreError::VersionConflict
    async fn save(&self, snapshot: ListSnapshot) -> Result<Version>;
}
