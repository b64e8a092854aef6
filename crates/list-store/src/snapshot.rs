//! Persistence-shaped records and the versioned aggregate snapshot.

use common::{GuestId, HouseholdId};
use serde::{Deserialize, Serialize};

/// Optimistic concurrency token for the invitation list snapshot.
///
/// Assigned by the store at load time; `save` rejects a snapshot whose
/// version no longer matches the stored one.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Version(u64);

impl Version {
    /// The version of a list that has never been saved.
    pub fn initial() -> Self {
        Self(0)
    }

    /// Creates a version from its numeric value.
    pub fn new(version: u64) -> Self {
        Self(version)
    }

    /// Returns the version following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the underlying numeric value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw persisted shape of a guest.
///
/// Unvalidated: the domain layer validates on reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRecord {
    pub id: GuestId,
    pub name: String,
    pub dietary_requirements: Option<String>,
    pub attending: Option<bool>,
    pub is_child: bool,
    pub household: Option<HouseholdId>,
}

/// Raw persisted shape of a household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdRecord {
    pub id: HouseholdId,
    pub code: String,
    pub email: Option<String>,
    pub guests: Vec<GuestId>,
}

/// The whole invitation list as persisted: one snapshot per save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSnapshot {
    pub version: Version,
    pub households: Vec<HouseholdRecord>,
    pub guests: Vec<GuestRecord>,
}

impl ListSnapshot {
    /// The snapshot of a list that has never been saved.
    pub fn empty() -> Self {
        Self::default()
    }
}
