//! Commands accepted by the invitation service.
//!
//! Plain data carried from the transport layer into the orchestrators.

use common::{GuestId, HouseholdId};
use serde::{Deserialize, Serialize};

/// Add a guest to the list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddGuest {
    /// Caller-supplied ID; a fresh one is generated when absent.
    pub id: Option<GuestId>,
    pub name: String,
    pub dietary_requirements: Option<String>,
    pub attending: Option<bool>,
    pub is_child: Option<bool>,
}

impl AddGuest {
    /// A command carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Create the next household. Carries no data: the ID and code are assigned
/// by the service.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CreateHousehold;

/// Link an existing guest to an existing household.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddGuestToHousehold {
    pub household_id: HouseholdId,
    pub guest_id: GuestId,
}

impl AddGuestToHousehold {
    pub fn new(household_id: HouseholdId, guest_id: GuestId) -> Self {
        Self {
            household_id,
            guest_id,
        }
    }
}

/// Submit a household's RSVP.
///
/// `guests` must list every member of the household, in invitation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rsvp {
    pub household_code: String,
    pub email: String,
    pub guests: Vec<RsvpGuest>,
}

/// One guest's answers inside an RSVP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsvpGuest {
    pub id: GuestId,
    pub name: String,
    pub dietary_requirements: Option<String>,
    pub attending: Option<bool>,
}
