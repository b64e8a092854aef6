//! Invitation list domain events.
//!
//! Events are immutable facts recorded by aggregate transitions and
//! dispatched to the bus after the snapshot has been saved.

use chrono::{DateTime, Utc};
use common::{GuestId, HouseholdId};
use list_store::BusEvent;
use serde::{Deserialize, Serialize};

use super::{Guest, GuestDto, Household, HouseholdDto};

/// Events emitted by invitation list transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ListEvent {
    /// A guest was added to the list.
    GuestAdded(GuestAddedData),

    /// A guest was linked to a household.
    GuestAddedToHousehold(GuestAddedToHouseholdData),

    /// A household was created.
    HouseholdCreated(HouseholdCreatedData),

    /// A household submitted its RSVP.
    Rsvped(RsvpedData),
}

impl BusEvent for ListEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ListEvent::GuestAdded(_) => "GuestAdded",
            ListEvent::GuestAddedToHousehold(_) => "GuestAddedToHousehold",
            ListEvent::HouseholdCreated(_) => "HouseholdCreated",
            ListEvent::Rsvped(_) => "Rsvped",
        }
    }
}

/// Data for the GuestAdded event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestAddedData {
    pub guest: GuestDto,
    pub occurred_at: DateTime<Utc>,
}

/// Data for the GuestAddedToHousehold event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestAddedToHouseholdData {
    pub guest_id: GuestId,
    pub household_id: HouseholdId,
    pub occurred_at: DateTime<Utc>,
}

/// Data for the HouseholdCreated event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdCreatedData {
    pub household: HouseholdDto,
    pub occurred_at: DateTime<Utc>,
}

/// Data for the Rsvped event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsvpedData {
    pub household_code: String,
    pub occurred_at: DateTime<Utc>,
}

// Convenience constructors for events
impl ListEvent {
    /// Creates a GuestAdded event.
    pub fn guest_added(guest: &Guest) -> Self {
        ListEvent::GuestAdded(GuestAddedData {
            guest: guest.to_dto(),
            occurred_at: Utc::now(),
        })
    }

    /// Creates a GuestAddedToHousehold event.
    pub fn guest_added_to_household(guest_id: GuestId, household_id: HouseholdId) -> Self {
        ListEvent::GuestAddedToHousehold(GuestAddedToHouseholdData {
            guest_id,
            household_id,
            occurred_at: Utc::now(),
        })
    }

    /// Creates a HouseholdCreated event.
    pub fn household_created(household: &Household) -> Self {
        ListEvent::HouseholdCreated(HouseholdCreatedData {
            household: household.to_dto(),
            occurred_at: Utc::now(),
        })
    }

    /// Creates an Rsvped event.
    pub fn rsvped(household_code: &str) -> Self {
        ListEvent::Rsvped(RsvpedData {
            household_code: household_code.to_string(),
            occurred_at: Utc::now(),
        })
    }
}
