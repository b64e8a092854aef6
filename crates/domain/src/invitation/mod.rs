//! Invitation list aggregate and related types.

mod aggregate;
mod commands;
mod dto;
mod events;
mod guest;
mod household;
mod service;

pub use aggregate::{InvitationList, Transition};
pub use commands::{AddGuest, AddGuestToHousehold, CreateHousehold, Rsvp, RsvpGuest};
pub use dto::{GuestDto, HouseholdDto, InvitationListDto};
pub use events::{
    GuestAddedData, GuestAddedToHouseholdData, HouseholdCreatedData, ListEvent, RsvpedData,
};
pub use guest::{Guest, GuestProps};
pub use household::{Household, HouseholdProps};
pub use service::InvitationService;

use common::{GuestId, HouseholdId};
use thiserror::Error;

/// Errors that can occur during invitation list operations.
///
/// The taxonomy is closed: each aggregate operation fails with exactly one of
/// these kinds, and all of them are recoverable business conditions.
#[derive(Debug, Error)]
pub enum ListError {
    /// Guest failed validation at construction.
    #[error("failed to create guest: {reason}")]
    InvalidGuest { reason: String },

    /// Household failed validation at construction.
    #[error("failed to create household: {reason}")]
    InvalidHousehold { reason: String },

    /// No guest with that ID on the list.
    #[error("guest not found: {guest_id}")]
    GuestNotFound { guest_id: GuestId },

    /// No household matching that ID or code.
    #[error("household not found: {reference}")]
    HouseholdNotFound { reference: String },

    /// A guest with the identical name is already on the list.
    #[error("a guest named {name:?} already exists")]
    GuestNameTaken { name: String },

    /// A household with that ID is already on the list.
    #[error("household {household_id} already exists")]
    HouseholdAlreadyExists { household_id: HouseholdId },

    /// The RSVP roster does not match the household's stored guest list.
    #[error("supplied guests do not match the household roster")]
    GuestsNotInHousehold,
}
