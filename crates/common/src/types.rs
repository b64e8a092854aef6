use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a guest.
///
/// Opaque string, assigned at creation and immutable afterwards. Generated
/// ids are UUID-backed; callers may also supply their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestId(String);

impl GuestId {
    /// Creates a new random guest ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the guest ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GuestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GuestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GuestId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for GuestId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for GuestId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for a household.
///
/// Positive integer assigned sequentially by the invitation list when the
/// household is created, immutable once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HouseholdId(u32);

impl HouseholdId {
    /// Creates a household ID from its numeric value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying numeric value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for HouseholdId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for HouseholdId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<HouseholdId> for u32 {
    fn from(id: HouseholdId) -> Self {
        id.0
    }
}

/// Error returned when a string is not a well-formed household code.
#[derive(Debug, Error)]
#[error("invalid household code: {code:?}")]
pub struct InvalidHouseholdCode {
    /// The rejected input.
    pub code: String,
}

/// Public-facing lookup token for a household.
///
/// Derived deterministically from the household ID as the base-62 encoding of
/// `1000 + id`, so code uniqueness follows from ID uniqueness. Guests use the
/// code to locate their household when submitting an RSVP.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HouseholdCode(String);

impl HouseholdCode {
    // Offset keeps codes at least two characters long (base62(1001) = "G9").
    const OFFSET: u64 = 1000;

    /// Derives the canonical code for a household ID.
    pub fn derive(id: HouseholdId) -> Self {
        Self(base62::encode(Self::OFFSET + u64::from(id.as_u32())))
    }

    /// Parses an untrusted string as a household code.
    ///
    /// Accepts non-empty strings over the base-62 alphabet (`0-9A-Za-z`).
    /// Format-only: a well-formed code may still match no household.
    pub fn parse(code: &str) -> Result<Self, InvalidHouseholdCode> {
        if !code.is_empty() && code.bytes().all(|b| b.is_ascii_alphanumeric()) {
            Ok(Self(code.to_string()))
        } else {
            Err(InvalidHouseholdCode {
                code: code.to_string(),
            })
        }
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HouseholdCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for HouseholdCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
