//! Shared identifier types for the invitation list system.

pub mod types;

pub use types::{GuestId, HouseholdCode, HouseholdId, InvalidHouseholdCode};
