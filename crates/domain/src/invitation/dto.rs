//! Output representations returned by the command orchestrators.

use common::{GuestId, HouseholdId};
use serde::{Deserialize, Serialize};

/// Guest as exposed to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDto {
    pub id: GuestId,
    pub name: String,
    pub dietary_requirements: Option<String>,
    pub attending: Option<bool>,
    pub is_child: bool,
    pub household: Option<HouseholdId>,
}

/// Household as exposed to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdDto {
    pub id: HouseholdId,
    pub code: String,
    pub email: Option<String>,
    pub guests: Vec<GuestId>,
}

/// The whole invitation list as exposed to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitationListDto {
    pub households: Vec<HouseholdDto>,
    pub guests: Vec<GuestDto>,
}
