//! Invitation list aggregate.

use common::{GuestId, HouseholdCode, HouseholdId};
use list_store::{ListSnapshot, Version};

use super::{Guest, Household, InvitationListDto, ListError, ListEvent};

/// Result of a state transition: the next aggregate value plus the events
/// the transition emitted.
///
/// Events are not part of the aggregate; the orchestrator dispatches them
/// once the snapshot has been saved.
#[derive(Debug, Clone)]
pub struct Transition {
    pub list: InvitationList,
    pub events: Vec<ListEvent>,
}

/// The invitation list aggregate root.
///
/// Holds every guest and household and enforces the list-wide invariants:
/// guest names are unique, household IDs are unique, and a guest's household
/// reference always agrees with that household's roster. All operations are
/// pure transforms: the input list is never mutated, failures leave it
/// untouched by construction.
#[derive(Debug, Clone, Default)]
pub struct InvitationList {
    version: Version,
    households: Vec<Household>,
    guests: Vec<Guest>,
}

impl InvitationList {
    /// Creates an empty list at the initial version.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstructs the aggregate from a persisted snapshot.
    ///
    /// Strict: the first record that fails validation fails the whole load.
    pub fn from_snapshot(snapshot: ListSnapshot) -> Result<Self, ListError> {
        let guests = snapshot
            .guests
            .into_iter()
            .map(Guest::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        let households = snapshot
            .households
            .into_iter()
            .map(Household::from_record)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            version: snapshot.version,
            households,
            guests,
        })
    }

    /// Projects to the persistence shape, carrying the version this
    /// aggregate was loaded at.
    pub fn to_snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            version: self.version,
            households: self.households.iter().map(Household::to_record).collect(),
            guests: self.guests.iter().map(Guest::to_record).collect(),
        }
    }

    /// Projects to the output shape.
    pub fn to_dto(&self) -> InvitationListDto {
        InvitationListDto {
            households: self.households.iter().map(Household::to_dto).collect(),
            guests: self.guests.iter().map(Guest::to_dto).collect(),
        }
    }

    /// The optimistic concurrency token assigned at load time.
    pub fn version(&self) -> Version {
        self.version
    }

    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    pub fn households(&self) -> &[Household] {
        &self.households
    }

    pub fn find_guest(&self, guest_id: &GuestId) -> Option<&Guest> {
        self.guests.iter().find(|g| g.id() == guest_id)
    }

    pub fn find_household(&self, household_id: HouseholdId) -> Option<&Household> {
        self.households.iter().find(|h| h.id() == household_id)
    }

    /// The ID the next household will receive: household count plus one.
    ///
    /// Computed against this snapshot; a racing command computing the same ID
    /// loses at save time when the store rejects its stale version. IDs are
    /// `u32`, so the count is capped at `u32::MAX - 1` households; a single
    /// wedding list stays far below that.
    pub fn next_household_id(&self) -> HouseholdId {
        let count = u32::try_from(self.households.len()).unwrap_or(u32::MAX - 1);
        HouseholdId::new(count + 1)
    }

    /// Finds the household with exactly this code.
    pub fn find_household_by_code(&self, code: &HouseholdCode) -> Result<&Household, ListError> {
        self.households
            .iter()
            .find(|h| h.code() == code)
            .ok_or_else(|| ListError::HouseholdNotFound {
                reference: code.to_string(),
            })
    }

    /// Appends a household, enforcing ID uniqueness.
    ///
    /// Emits `HouseholdCreated`.
    pub fn add_household(&self, household: Household) -> Result<Transition, ListError> {
        if self.find_household(household.id()).is_some() {
            return Err(ListError::HouseholdAlreadyExists {
                household_id: household.id(),
            });
        }

        let event = ListEvent::household_created(&household);
        let mut households = self.households.clone();
        households.push(household);

        Ok(Transition {
            list: InvitationList {
                version: self.version,
                households,
                guests: self.guests.clone(),
            },
            events: vec![event],
        })
    }

    /// Appends a guest, enforcing list-wide name uniqueness (case-sensitive
    /// exact match).
    ///
    /// Emits `GuestAdded`.
    pub fn add_guest(&self, guest: Guest) -> Result<Transition, ListError> {
        if self.guests.iter().any(|g| g.name() == guest.name()) {
            return Err(ListError::GuestNameTaken {
                name: guest.name().to_string(),
            });
        }

        let event = ListEvent::guest_added(&guest);
        let mut guests = self.guests.clone();
        guests.push(guest);

        Ok(Transition {
            list: InvitationList {
                version: self.version,
                households: self.households.clone(),
                guests,
            },
            events: vec![event],
        })
    }

    /// Links a guest to a household, keeping both sides consistent: the
    /// guest's household reference is set and the household roster gains the
    /// guest's ID. The guest is looked up first.
    ///
    /// Idempotent: re-linking an already linked pair returns the list
    /// unchanged and emits nothing. Emits `GuestAddedToHousehold` otherwise.
    pub fn add_guest_to_household(
        &self,
        household_id: HouseholdId,
        guest_id: &GuestId,
    ) -> Result<Transition, ListError> {
        let guest = self
            .find_guest(guest_id)
            .ok_or_else(|| ListError::GuestNotFound {
                guest_id: guest_id.clone(),
            })?;
        let household =
            self.find_household(household_id)
                .ok_or_else(|| ListError::HouseholdNotFound {
                    reference: household_id.to_string(),
                })?;

        if guest.household() == Some(household_id) && household.contains_guest(guest_id) {
            return Ok(Transition {
                list: self.clone(),
                events: vec![],
            });
        }

        let updated_guest = guest.with_household(household_id);
        let updated_household = if household.contains_guest(guest_id) {
            household.clone()
        } else {
            household.with_guest(guest_id.clone())
        };

        let households = self
            .households
            .iter()
            .map(|h| {
                if h.id() == household_id {
                    updated_household.clone()
                } else {
                    h.clone()
                }
            })
            .collect();
        let guests = self
            .guests
            .iter()
            .map(|g| {
                if g.id() == guest_id {
                    updated_guest.clone()
                } else {
                    g.clone()
                }
            })
            .collect();

        Ok(Transition {
            list: InvitationList {
                version: self.version,
                households,
                guests,
            },
            events: vec![ListEvent::guest_added_to_household(
                guest_id.clone(),
                household_id,
            )],
        })
    }

    /// Records a household's RSVP.
    ///
    /// The sequence of update IDs must equal the household's stored roster
    /// exactly (same IDs, same order). On success the household email is
    /// overwritten with the supplied value, even when empty, and each guest
    /// is merged with its update via [`Guest::merge`].
    ///
    /// Merged names are not re-checked against the rest of the list: an RSVP
    /// that renames a guest may introduce a name already held by a guest in
    /// another household. Name uniqueness is enforced at admission
    /// ([`InvitationList::add_guest`]) only.
    ///
    /// Emits `Rsvped`.
    pub fn rsvp(
        &self,
        code: &HouseholdCode,
        email: &str,
        updates: &[Guest],
    ) -> Result<Transition, ListError> {
        let household = self.find_household_by_code(code)?;

        let roster_matches = household
            .guests()
            .iter()
            .eq(updates.iter().map(|u| u.id()));
        if !roster_matches {
            return Err(ListError::GuestsNotInHousehold);
        }

        let households = self
            .households
            .iter()
            .map(|h| {
                if h.code() == code {
                    h.with_email(email)
                } else {
                    h.clone()
                }
            })
            .collect();
        let guests = self
            .guests
            .iter()
            .map(|g| match updates.iter().find(|u| u.id() == g.id()) {
                Some(update) => g.merge(update),
                None => g.clone(),
            })
            .collect();

        Ok(Transition {
            list: InvitationList {
                version: self.version,
                households,
                guests,
            },
            events: vec![ListEvent::rsvped(code.as_str())],
        })
    }
}
