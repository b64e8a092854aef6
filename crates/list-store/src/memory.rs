use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    ListSnapshot, ListStoreError, Result, Version,
    store::ListStore,
};

/// In-memory list store implementation for testing.
///
/// Holds the latest snapshot behind a lock and applies the same version
/// check a database-backed implementation would.
#[derive(Clone, Default)]
pub struct InMemoryListStore {
    current: Arc<RwLock<ListSnapshot>>,
}

impl InMemoryListStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with an existing snapshot.
    pub fn with_snapshot(snapshot: ListSnapshot) -> Self {
        Self {
            current: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// Returns the version currently stored.
    pub async fn stored_version(&self) -> Version {
        self.current.read().await.version
    }
}

#[async_trait]
impl ListStore for InMemoryListStore {
    async fn find(&self) -> Result<ListSnapshot> {
        Ok(self.current.read().await.clone())
    }

    async fn save(&self, snapshot: ListSnapshot) -> Result<Version> {
        let mut current = self.current.write().await;

        if snapshot.version != current.version {
            return Err(ListStoreError::VersionConflict {
                expected: snapshot.version,
                actual: current.version,
            });
        }

        let new_version = current.version.next();
        *current = ListSnapshot {
            version: new_version,
            households: snapshot.households,
            guests: snapshot.guests,
        };

        Ok(new_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{GuestId, HouseholdId};
    use crate::snapshot::{GuestRecord, HouseholdRecord};

    fn guest_record(id: &str, name: &str) -> GuestRecord {
        GuestRecord {
            id: GuestId::from(id),
            name: name.to_string(),
            dietary_requirements: None,
            attending: None,
            is_child: false,
            household: None,
        }
    }

    #[tokio::test]
    async fn find_on_fresh_store_returns_empty_snapshot() {
        let store = InMemoryListStore::new();
        let snapshot = store.find().await.unwrap();
        assert_eq!(snapshot, ListSnapshot::empty());
    }

    #[tokio::test]
    async fn save_bumps_version_and_persists() {
        let store = InMemoryListStore::new();

        let mut snapshot = store.find().await.unwrap();
        snapshot.guests.push(guest_record("g-1", "Jane Doe"));

        let version = store.save(snapshot).await.unwrap();
        assert_eq!(version, Version::new(1));

        let reloaded = store.find().await.unwrap();
        assert_eq!(reloaded.version, Version::new(1));
        assert_eq!(reloaded.guests.len(), 1);
    }

    #[tokio::test]
    async fn stale_save_is_rejected() {
        let store = InMemoryListStore::new();

        // Two commands load the same snapshot.
        let first = store.find().await.unwrap();
        let second = store.find().await.unwrap();

        store.save(first).await.unwrap();

        let result = store.save(second).await;
        match result {
            Err(ListStoreError::VersionConflict { expected, actual }) => {
                assert_eq!(expected, Version::initial());
                assert_eq!(actual, Version::new(1));
            }
            other => panic!("expected version conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fresh_load_after_conflict_succeeds() {
        let store = InMemoryListStore::new();
        store.save(store.find().await.unwrap()).await.unwrap();

        let mut snapshot = store.find().await.unwrap();
        snapshot.households.push(HouseholdRecord {
            id: HouseholdId::new(1),
            code: "G9".to_string(),
            email: None,
            guests: vec![],
        });

        let version = store.save(snapshot).await.unwrap();
        assert_eq!(version, Version::new(2));
    }

    #[tokio::test]
    async fn with_snapshot_seeds_store() {
        let seeded = ListSnapshot {
            version: Version::new(5),
            households: vec![],
            guests: vec![guest_record("g-1", "Jane Doe")],
        };
        let store = InMemoryListStore::with_snapshot(seeded.clone());

        assert_eq!(store.stored_version().await, Version::new(5));
        assert_eq!(store.find().await.unwrap(), seeded);
    }
}
