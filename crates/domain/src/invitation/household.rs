//! Household entity.

use common::{GuestId, HouseholdCode, HouseholdId};
use list_store::HouseholdRecord;

use super::{HouseholdDto, ListError};

/// Properties accepted when creating a household.
#[derive(Debug, Clone)]
pub struct HouseholdProps {
    pub id: HouseholdId,
    pub code: HouseholdCode,
    pub email: Option<String>,
    pub guests: Vec<GuestId>,
}

impl HouseholdProps {
    /// Props for a brand-new household: no email, no guests.
    pub fn new(id: HouseholdId, code: HouseholdCode) -> Self {
        Self {
            id,
            code,
            email: None,
            guests: Vec::new(),
        }
    }
}

/// A group of guests sharing one invitation and one RSVP.
///
/// Constructed only through [`Household::create`]; the code always matches
/// the canonical derivation for the ID and the roster holds no duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Household {
    id: HouseholdId,
    code: HouseholdCode,
    email: Option<String>,
    guests: Vec<GuestId>,
}

impl Household {
    /// Creates a validated household.
    pub fn create(props: HouseholdProps) -> Result<Household, ListError> {
        let canonical = HouseholdCode::derive(props.id);
        if props.code != canonical {
            return Err(ListError::InvalidHousehold {
                reason: format!(
                    "code {:?} does not match household {} (expected {:?})",
                    props.code.as_str(),
                    props.id,
                    canonical.as_str(),
                ),
            });
        }

        for (i, guest_id) in props.guests.iter().enumerate() {
            if props.guests[..i].contains(guest_id) {
                return Err(ListError::InvalidHousehold {
                    reason: format!("duplicate guest {guest_id} in roster"),
                });
            }
        }

        Ok(Household {
            id: props.id,
            code: props.code,
            email: props.email,
            guests: props.guests,
        })
    }

    /// Reconstructs a household from its persisted record, re-validating it.
    pub fn from_record(record: HouseholdRecord) -> Result<Household, ListError> {
        let code = HouseholdCode::parse(&record.code).map_err(|e| ListError::InvalidHousehold {
            reason: e.to_string(),
        })?;

        Household::create(HouseholdProps {
            id: record.id,
            code,
            email: record.email,
            guests: record.guests,
        })
    }

    pub fn id(&self) -> HouseholdId {
        self.id
    }

    pub fn code(&self) -> &HouseholdCode {
        &self.code
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Guest IDs in invitation order.
    pub fn guests(&self) -> &[GuestId] {
        &self.guests
    }

    pub fn contains_guest(&self, guest_id: &GuestId) -> bool {
        self.guests.contains(guest_id)
    }

    /// Returns this household with the guest appended to the roster.
    pub(super) fn with_guest(&self, guest_id: GuestId) -> Household {
        let mut guests = self.guests.clone();
        guests.push(guest_id);
        Household {
            guests,
            ..self.clone()
        }
    }

    /// Returns this household with the RSVP email set, overwriting any
    /// previous value.
    pub(super) fn with_email(&self, email: &str) -> Household {
        Household {
            email: Some(email.to_string()),
            ..self.clone()
        }
    }

    /// Projects to the persistence shape. Pure and total.
    pub fn to_record(&self) -> HouseholdRecord {
        HouseholdRecord {
            id: self.id,
            code: self.code.as_str().to_string(),
            email: self.email.clone(),
            guests: self.guests.clone(),
        }
    }

    /// Projects to the output shape. Pure and total.
    pub fn to_dto(&self) -> HouseholdDto {
        HouseholdDto {
            id: self.id,
            code: self.code.as_str().to_string(),
            email: self.email.clone(),
            guests: self.guests.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn household(id: u32) -> Household {
        let id = HouseholdId::new(id);
        Household::create(HouseholdProps::new(id, HouseholdCode::derive(id))).unwrap()
    }

    #[test]
    fn create_applies_defaults() {
        let h = household(1);
        assert_eq!(h.id(), HouseholdId::new(1));
        assert_eq!(h.email(), None);
        assert!(h.guests().is_empty());
    }

    #[test]
    fn create_rejects_mismatched_code() {
        let result = Household::create(HouseholdProps::new(
            HouseholdId::new(1),
            HouseholdCode::derive(HouseholdId::new(2)),
        ));
        assert!(matches!(result, Err(ListError::InvalidHousehold { .. })));
    }

    #[test]
    fn create_rejects_duplicate_roster_entries() {
        let id = HouseholdId::new(1);
        let result = Household::create(HouseholdProps {
            id,
            code: HouseholdCode::derive(id),
            email: None,
            guests: vec![GuestId::from("g-1"), GuestId::from("g-1")],
        });
        assert!(matches!(result, Err(ListError::InvalidHousehold { .. })));
    }

    #[test]
    fn from_record_rejects_malformed_codes() {
        let record = HouseholdRecord {
            id: HouseholdId::new(1),
            code: "not a code!".to_string(),
            email: None,
            guests: vec![],
        };
        assert!(matches!(
            Household::from_record(record),
            Err(ListError::InvalidHousehold { .. })
        ));
    }

    #[test]
    fn record_projection_roundtrips() {
        let id = HouseholdId::new(3);
        let h = Household::create(HouseholdProps {
            id,
            code: HouseholdCode::derive(id),
            email: Some("a@b.com".to_string()),
            guests: vec![GuestId::from("g-1"), GuestId::from("g-2")],
        })
        .unwrap();

        let restored = Household::from_record(h.to_record()).unwrap();
        assert_eq!(restored, h);
    }

    #[test]
    fn with_email_overwrites_unconditionally() {
        let h = household(1).with_email("a@b.com");
        assert_eq!(h.email(), Some("a@b.com"));

        let h = h.with_email("");
        assert_eq!(h.email(), Some(""));
    }

    #[test]
    fn with_guest_appends_in_order() {
        let h = household(1)
            .with_guest(GuestId::from("g-1"))
            .with_guest(GuestId::from("g-2"));
        assert_eq!(h.guests(), &[GuestId::from("g-1"), GuestId::from("g-2")]);
        assert!(h.contains_guest(&GuestId::from("g-1")));
        assert!(!h.contains_guest(&GuestId::from("g-3")));
    }
}
