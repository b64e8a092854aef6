//! Guest entity.

use common::{GuestId, HouseholdId};
use list_store::GuestRecord;

use super::{GuestDto, ListError};

// Name length bounds, exclusive on both ends.
const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;

/// Properties accepted when creating a guest.
#[derive(Debug, Clone, Default)]
pub struct GuestProps {
    pub name: String,
    pub dietary_requirements: Option<String>,
    pub attending: Option<bool>,
    pub is_child: bool,
    pub household: Option<HouseholdId>,
}

/// A single invitee.
///
/// Constructed only through [`Guest::create`]; the name invariant holds for
/// every instance. References its household by ID only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    id: GuestId,
    name: String,
    dietary_requirements: Option<String>,
    attending: Option<bool>,
    is_child: bool,
    household: Option<HouseholdId>,
}

impl Guest {
    /// Creates a validated guest.
    ///
    /// The name must be strictly between 2 and 100 characters. A fresh ID is
    /// generated when none is supplied.
    pub fn create(props: GuestProps, id: Option<GuestId>) -> Result<Guest, ListError> {
        let length = props.name.chars().count();
        if length <= NAME_MIN || length >= NAME_MAX {
            return Err(ListError::InvalidGuest {
                reason: format!(
                    "name must be between {} and {} characters, got {length}",
                    NAME_MIN + 1,
                    NAME_MAX - 1,
                ),
            });
        }

        Ok(Guest {
            id: id.unwrap_or_default(),
            name: props.name,
            dietary_requirements: props.dietary_requirements,
            attending: props.attending,
            is_child: props.is_child,
            household: props.household,
        })
    }

    /// Reconstructs a guest from its persisted record, re-validating it.
    pub fn from_record(record: GuestRecord) -> Result<Guest, ListError> {
        Guest::create(
            GuestProps {
                name: record.name,
                dietary_requirements: record.dietary_requirements,
                attending: record.attending,
                is_child: record.is_child,
                household: record.household,
            },
            Some(record.id),
        )
    }

    pub fn id(&self) -> &GuestId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dietary_requirements(&self) -> Option<&str> {
        self.dietary_requirements.as_deref()
    }

    /// Tri-state attendance: unknown until the household RSVPs.
    pub fn attending(&self) -> Option<bool> {
        self.attending
    }

    pub fn is_child(&self) -> bool {
        self.is_child
    }

    pub fn household(&self) -> Option<HouseholdId> {
        self.household
    }

    /// Merges an incoming RSVP update into this guest.
    ///
    /// Precedence is last-write-wins except for the ID: the ID and, for
    /// optional fields, any value the update leaves unset stay as they were;
    /// name and `is_child` always take the incoming value.
    pub fn merge(&self, incoming: &Guest) -> Guest {
        Guest {
            id: self.id.clone(),
            name: incoming.name.clone(),
            dietary_requirements: incoming
                .dietary_requirements
                .clone()
                .or_else(|| self.dietary_requirements.clone()),
            attending: incoming.attending.or(self.attending),
            is_child: incoming.is_child,
            household: incoming.household.or(self.household),
        }
    }

    /// Returns this guest linked to the given household.
    pub(super) fn with_household(&self, household_id: HouseholdId) -> Guest {
        Guest {
            household: Some(household_id),
            ..self.clone()
        }
    }

    /// Projects to the persistence shape. Pure and total.
    pub fn to_record(&self) -> GuestRecord {
        GuestRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            dietary_requirements: self.dietary_requirements.clone(),
            attending: self.attending,
            is_child: self.is_child,
            household: self.household,
        }
    }

    /// Projects to the output shape. Pure and total.
    pub fn to_dto(&self) -> GuestDto {
        GuestDto {
            id: self.id.clone(),
            name: self.name.clone(),
            dietary_requirements: self.dietary_requirements.clone(),
            attending: self.attending,
            is_child: self.is_child,
            household: self.household,
        }
    }
}
