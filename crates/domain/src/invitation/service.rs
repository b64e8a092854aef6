//! Command orchestrators for the invitation list.

use common::HouseholdCode;
use list_store::{EventBus, ListStore};
use tracing::info;

use super::{
    AddGuest, AddGuestToHousehold, CreateHousehold, Guest, GuestDto, GuestProps, Household,
    HouseholdDto, HouseholdProps, InvitationList, InvitationListDto, ListError, ListEvent, Rsvp,
    Transition,
};
use crate::error::DomainError;

/// Orchestrates invitation list commands against a store and an event bus.
///
/// Every command follows the same pipeline: load the latest snapshot,
/// reconstruct the aggregate, run the transition, save the result, then
/// dispatch the emitted events. Events are only dispatched after a
/// successful save, so a failed command publishes nothing.
pub struct InvitationService<S, B> {
    store: S,
    bus: B,
}

impl<S, B> InvitationService<S, B>
where
    S: ListStore,
    B: EventBus<ListEvent>,
{
    pub fn new(store: S, bus: B) -> Self {
        Self { store, bus }
    }

    async fn load(&self) -> Result<InvitationList, DomainError> {
        let snapshot = self.store.find().await?;
        let list = InvitationList::from_snapshot(snapshot)?;
        Ok(list)
    }

    async fn persist_and_dispatch(
        &self,
        transition: Transition,
    ) -> Result<InvitationList, DomainError> {
        let Transition { list, events } = transition;
        self.store.save(list.to_snapshot()).await?;
        for event in &events {
            self.bus.emit(event);
        }
        Ok(list)
    }

    /// Adds a guest to the list.
    #[tracing::instrument(skip(self))]
    pub async fn add_guest(&self, command: AddGuest) -> Result<GuestDto, DomainError> {
        let list = self.load().await?;

        let guest = Guest::create(
            GuestProps {
                name: command.name,
                dietary_requirements: command.dietary_requirements,
                attending: command.attending,
                is_child: command.is_child.unwrap_or(false),
                household: None,
            },
            command.id,
        )?;
        let dto = guest.to_dto();

        let transition = list.add_guest(guest)?;
        self.persist_and_dispatch(transition).await?;

        info!(guest_id = %dto.id, "guest added");
        Ok(dto)
    }

    /// Creates the next household, assigning its ID and code.
    #[tracing::instrument(skip(self))]
    pub async fn create_household(
        &self,
        _command: CreateHousehold,
    ) -> Result<HouseholdDto, DomainError> {
        let list = self.load().await?;

        let id = list.next_household_id();
        let code = HouseholdCode::derive(id);
        let household = Household::create(HouseholdProps::new(id, code))?;
        let dto = household.to_dto();

        let transition = list.add_household(household)?;
        self.persist_and_dispatch(transition).await?;

        info!(household_id = %dto.id, code = %dto.code, "household created");
        Ok(dto)
    }

    /// Links an existing guest to an existing household.
    #[tracing::instrument(skip(self))]
    pub async fn add_guest_to_household(
        &self,
        command: AddGuestToHousehold,
    ) -> Result<InvitationListDto, DomainError> {
        let list = self.load().await?;

        let transition = list.add_guest_to_household(command.household_id, &command.guest_id)?;
        let list = self.persist_and_dispatch(transition).await?;

        info!(
            guest_id = %command.guest_id,
            household_id = %command.household_id,
            "guest linked to household",
        );
        Ok(list.to_dto())
    }

    /// Records a household's RSVP.
    #[tracing::instrument(skip(self))]
    pub async fn rsvp(&self, command: Rsvp) -> Result<InvitationListDto, DomainError> {
        let list = self.load().await?;

        // A malformed code cannot name any household.
        let code =
            HouseholdCode::parse(&command.household_code).map_err(|_| {
                ListError::HouseholdNotFound {
                    reference: command.household_code.clone(),
                }
            })?;

        let updates = command
            .guests
            .into_iter()
            .map(|update| {
                Guest::create(
                    GuestProps {
                        name: update.name,
                        dietary_requirements: update.dietary_requirements,
                        attending: update.attending,
                        is_child: false,
                        household: None,
                    },
                    Some(update.id),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let transition = list.rsvp(&code, &command.email, &updates)?;
        let list = self.persist_and_dispatch(transition).await?;

        info!(code = %code, "rsvp recorded");
        Ok(list.to_dto())
    }

    /// Returns the current list.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<InvitationListDto, DomainError> {
        let list = self.load().await?;
        Ok(list.to_dto())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invitation::RsvpGuest;
    use async_trait::async_trait;
    use common::{GuestId, HouseholdId};
    use list_store::{
        InMemoryListStore, ListSnapshot, ListStoreError, RecordingEventBus, Version,
    };
    use std::sync::Arc;

    type TestService = InvitationService<InMemoryListStore, Arc<RecordingEventBus<ListEvent>>>;

    fn service() -> (TestService, InMemoryListStore, Arc<RecordingEventBus<ListEvent>>) {
        let store = InMemoryListStore::new();
        let bus = Arc::new(RecordingEventBus::new());
        let service = InvitationService::new(store.clone(), Arc::clone(&bus));
        (service, store, bus)
    }

    #[tokio::test]
    async fn add_guest_persists_and_dispatches() {
        let (service, store, bus) = service();

        let dto = service.add_guest(AddGuest::named("Jane Doe")).await.unwrap();
        assert_eq!(dto.name, "Jane Doe");
        assert_eq!(dto.attending, None);

        let snapshot = store.find().await.unwrap();
        assert_eq!(snapshot.version, Version::new(1));
        assert_eq!(snapshot.guests.len(), 1);

        let events = bus.emitted();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            ListEvent::GuestAdded(data) if data.guest == dto
        ));
    }

    #[tokio::test]
    async fn add_guest_rejects_duplicate_names() {
        let (service, _store, bus) = service();
        service.add_guest(AddGuest::named("Jane Doe")).await.unwrap();

        let result = service.add_guest(AddGuest::named("Jane Doe")).await;
        assert!(matches!(
            result,
            Err(DomainError::List(ListError::GuestNameTaken { .. }))
        ));
        // Only the first command published anything.
        assert_eq!(bus.len(), 1);
    }

    #[tokio::test]
    async fn add_guest_rejects_invalid_names_before_touching_the_store() {
        let (service, store, bus) = service();

        let result = service.add_guest(AddGuest::named("ab")).await;
        assert!(matches!(
            result,
            Err(DomainError::List(ListError::InvalidGuest { .. }))
        ));
        assert_eq!(store.stored_version().await, Version::initial());
        assert!(bus.is_empty());
    }

    #[tokio::test]
    async fn households_receive_sequential_ids_and_codes() {
        let (service, _store, bus) = service();

        let first = service.create_household(CreateHousehold).await.unwrap();
        let second = service.create_household(CreateHousehold).await.unwrap();

        assert_eq!(first.id, HouseholdId::new(1));
        assert_eq!(first.code, "G9");
        assert_eq!(second.id, HouseholdId::new(2));
        assert_eq!(second.code, "GA");

        let events = bus.emitted();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            ListEvent::HouseholdCreated(data) if data.household == first
        ));
    }

    #[tokio::test]
    async fn linking_updates_both_sides() {
        let (service, _store, bus) = service();

        let guest = service.add_guest(AddGuest::named("Jane Doe")).await.unwrap();
        let household = service.create_household(CreateHousehold).await.unwrap();

        let dto = service
            .add_guest_to_household(AddGuestToHousehold::new(household.id, guest.id.clone()))
            .await
            .unwrap();

        assert_eq!(dto.guests[0].household, Some(household.id));
        assert_eq!(dto.households[0].guests, vec![guest.id.clone()]);

        assert!(matches!(
            bus.emitted().last(),
            Some(ListEvent::GuestAddedToHousehold(data))
                if data.guest_id == guest.id && data.household_id == household.id
        ));
    }

    #[tokio::test]
    async fn relinking_is_a_quiet_no_op() {
        let (service, store, bus) = service();

        let guest = service.add_guest(AddGuest::named("Jane Doe")).await.unwrap();
        let household = service.create_household(CreateHousehold).await.unwrap();
        let command = AddGuestToHousehold::new(household.id, guest.id.clone());

        service.add_guest_to_household(command.clone()).await.unwrap();
        let events_before = bus.len();
        let version_before = store.stored_version().await;

        let dto = service.add_guest_to_household(command).await.unwrap();

        assert_eq!(dto.households[0].guests, vec![guest.id]);
        assert_eq!(bus.len(), events_before);
        // The unchanged list is still saved, so the version advances.
        assert_eq!(store.stored_version().await, version_before.next());
    }

    #[tokio::test]
    async fn link_fails_for_unknown_guest() {
        let (service, _store, _bus) = service();
        let household = service.create_household(CreateHousehold).await.unwrap();

        let result = service
            .add_guest_to_household(AddGuestToHousehold::new(
                household.id,
                GuestId::from("missing"),
            ))
            .await;
        assert!(matches!(
            result,
            Err(DomainError::List(ListError::GuestNotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn rsvp_merges_answers_and_records_email() {
        let (service, _store, bus) = service();

        let guest = service.add_guest(AddGuest::named("Jane Doe")).await.unwrap();
        let household = service.create_household(CreateHousehold).await.unwrap();
        service
            .add_guest_to_household(AddGuestToHousehold::new(household.id, guest.id.clone()))
            .await
            .unwrap();

        let dto = service
            .rsvp(Rsvp {
                household_code: household.code.clone(),
                email: "a@b.com".to_string(),
                guests: vec![RsvpGuest {
                    id: guest.id.clone(),
                    name: "Jane Doe".to_string(),
                    dietary_requirements: Some("vegan".to_string()),
                    attending: Some(true),
                }],
            })
            .await
            .unwrap();

        assert_eq!(dto.households[0].email, Some("a@b.com".to_string()));
        let updated = &dto.guests[0];
        assert_eq!(updated.id, guest.id);
        assert_eq!(updated.dietary_requirements, Some("vegan".to_string()));
        assert_eq!(updated.attending, Some(true));
        assert_eq!(updated.household, Some(household.id));

        assert!(matches!(
            bus.emitted().last(),
            Some(ListEvent::Rsvped(data)) if data.household_code == household.code
        ));
    }

    #[tokio::test]
    async fn rsvp_with_malformed_code_reports_household_not_found() {
        let (service, _store, _bus) = service();

        let result = service
            .rsvp(Rsvp {
                household_code: "not a code!".to_string(),
                email: "a@b.com".to_string(),
                guests: vec![],
            })
            .await;
        assert!(matches!(
            result,
            Err(DomainError::List(ListError::HouseholdNotFound { reference }))
                if reference == "not a code!"
        ));
    }

    #[tokio::test]
    async fn rsvp_with_wrong_roster_publishes_nothing() {
        let (service, _store, bus) = service();

        let guest = service.add_guest(AddGuest::named("Jane Doe")).await.unwrap();
        let household = service.create_household(CreateHousehold).await.unwrap();
        service
            .add_guest_to_household(AddGuestToHousehold::new(household.id, guest.id))
            .await
            .unwrap();
        let events_before = bus.len();

        let result = service
            .rsvp(Rsvp {
                household_code: household.code,
                email: "a@b.com".to_string(),
                guests: vec![],
            })
            .await;
        assert!(matches!(
            result,
            Err(DomainError::List(ListError::GuestsNotInHousehold))
        ));
        assert_eq!(bus.len(), events_before);
    }

    #[tokio::test]
    async fn list_returns_the_current_state() {
        let (service, _store, _bus) = service();
        service.add_guest(AddGuest::named("Jane Doe")).await.unwrap();
        service.create_household(CreateHousehold).await.unwrap();

        let dto = service.list().await.unwrap();
        assert_eq!(dto.guests.len(), 1);
        assert_eq!(dto.households.len(), 1);
    }

    /// Store double whose save always reports a version conflict.
    struct ConflictingStore;

    #[async_trait]
    impl ListStore for ConflictingStore {
        async fn find(&self) -> list_store::Result<ListSnapshot> {
            Ok(ListSnapshot::empty())
        }

        async fn save(&self, snapshot: ListSnapshot) -> list_store::Result<Version> {
            Err(ListStoreError::VersionConflict {
                expected: snapshot.version,
                actual: snapshot.version.next(),
            })
        }
    }

    #[tokio::test]
    async fn save_failure_surfaces_and_suppresses_events() {
        let bus = Arc::new(RecordingEventBus::new());
        let service = InvitationService::new(ConflictingStore, Arc::clone(&bus));

        let result = service.add_guest(AddGuest::named("Jane Doe")).await;
        assert!(matches!(
            result,
            Err(DomainError::Store(ListStoreError::VersionConflict { .. }))
        ));
        assert!(bus.is_empty());
    }
}
