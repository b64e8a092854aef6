//! Domain layer for the invitation list service.
//!
//! This crate provides:
//! - `Guest` and `Household` entities with validated construction
//! - The `InvitationList` aggregate enforcing uniqueness and link invariants
//! - `ListEvent` domain events emitted by aggregate transitions
//! - `InvitationService` command orchestrators over the store and bus contracts

pub mod error;
pub mod invitation;

pub use error::DomainError;
pub use invitation::{
    AddGuest, AddGuestToHousehold, CreateHousehold, Guest, GuestDto, GuestProps, Household,
    HouseholdDto, HouseholdProps, InvitationList, InvitationListDto, InvitationService, ListError,
    ListEvent, Rsvp, RsvpGuest, Transition,
};
