//! # Screening Room Client
//!
//! High-level API for the [`ScreeningRoom`] actor. Customers use
//! [`enter`](ScreeningRoomClient::enter) and [`leave`](ScreeningRoomClient::leave);
//! the operator drives the lifecycle through the named transitions.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{RoomCreate, RoomId, RoomReport, RoomState, ScreeningRoom, VisitorId};
use crate::screening_room::{Admission, RoomAction, RoomActionResult, RoomError};
use async_trait::async_trait;
use tracing::{instrument, trace};

/// Client bound to the cinema's one screening room.
#[derive(Clone)]
pub struct ScreeningRoomClient {
    inner: ResourceClient<ScreeningRoom>,
    room: RoomId,
}

#[async_trait]
impl ActorClient<ScreeningRoom> for ScreeningRoomClient {
    type Error = RoomError;

    fn inner(&self) -> &ResourceClient<ScreeningRoom> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<RoomError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => RoomError::NotFound(id),
            Err(other) => RoomError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn unexpected(result: RoomActionResult) -> RoomError {
    RoomError::ActorCommunicationError(format!("unexpected reply: {result:?}"))
}

impl ScreeningRoomClient {
    pub fn new(inner: ResourceClient<ScreeningRoom>, room: RoomId) -> Self {
        Self { inner, room }
    }

    /// Creates the room, closed, inside a running actor and binds a client to it.
    #[instrument(skip(inner))]
    pub async fn install(
        inner: ResourceClient<ScreeningRoom>,
        capacity: usize,
    ) -> Result<Self, RoomError> {
        let room = inner
            .create(RoomCreate { capacity })
            .await
            .map_err(Self::map_error)?;
        Ok(Self::new(inner, room))
    }

    pub fn room(&self) -> RoomId {
        self.room
    }

    async fn act(&self, action: RoomAction) -> Result<RoomActionResult, RoomError> {
        trace!(?action, "Sending request");
        self.inner
            .perform_action(self.room, action)
            .await
            .map_err(Self::map_error)
    }

    /// Asks for a seat. The answer carries the waiter to block on next.
    #[instrument(skip(self, name))]
    pub async fn enter(&self, visitor: VisitorId, name: &str) -> Result<Admission, RoomError> {
        let action = RoomAction::Admit {
            visitor,
            name: name.to_string(),
        };
        match self.act(action).await? {
            RoomActionResult::Admit(admission) => Ok(admission),
            other => Err(unexpected(other)),
        }
    }

    /// Gives the seat back. Returns whether the visitor was seated.
    #[instrument(skip(self))]
    pub async fn leave(&self, visitor: VisitorId) -> Result<bool, RoomError> {
        match self.act(RoomAction::Leave { visitor }).await? {
            RoomActionResult::Leave(was_seated) => Ok(was_seated),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn transition(&self, next: RoomState) -> Result<RoomReport, RoomError> {
        match self.act(RoomAction::Transition(next)).await? {
            RoomActionResult::Transition(report) => Ok(report),
            other => Err(unexpected(other)),
        }
    }

    pub async fn open(&self) -> Result<RoomReport, RoomError> {
        self.transition(RoomState::Open).await
    }

    pub async fn start_projection(&self) -> Result<RoomReport, RoomError> {
        self.transition(RoomState::Projecting).await
    }

    pub async fn end_projection(&self) -> Result<RoomReport, RoomError> {
        self.transition(RoomState::Exiting).await
    }

    pub async fn clean(&self) -> Result<RoomReport, RoomError> {
        self.transition(RoomState::Cleaning).await
    }

    pub async fn close(&self) -> Result<RoomReport, RoomError> {
        self.transition(RoomState::Closed).await
    }

    /// A copy of the room as its actor currently sees it.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<ScreeningRoom, RoomError> {
        self.get(self.room)
            .await?
            .ok_or_else(|| RoomError::NotFound(self.room.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_create, MockClient};
    use crate::model::WaiterGroup;

    #[tokio::test]
    async fn test_install_creates_the_room() {
        let (client, mut receiver) = create_mock_client::<ScreeningRoom>(10);
        let install = tokio::spawn(ScreeningRoomClient::install(client, 4));

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.capacity, 4);
        responder.send(Ok(RoomId(1))).unwrap();

        let room = install.await.unwrap().unwrap();
        assert_eq!(room.room(), RoomId(1));
    }

    #[tokio::test]
    async fn test_enter_forwards_visitor_and_name() {
        let (client, mut receiver) = create_mock_client::<ScreeningRoom>(10);
        let room = ScreeningRoomClient::new(client, RoomId(1));

        let entering = tokio::spawn(async move { room.enter(VisitorId(5), "Ada").await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, RoomId(1));
        match action {
            RoomAction::Admit { visitor, name } => {
                assert_eq!(visitor, VisitorId(5));
                assert_eq!(name, "Ada");
            }
            other => panic!("expected Admit, got {other:?}"),
        }
        let group = WaiterGroup::new();
        responder
            .send(Ok(RoomActionResult::Admit(Admission::Admitted {
                cycle: 1,
                screening_over: group.subscribe(),
            })))
            .unwrap();

        let admission = entering.await.unwrap().unwrap();
        assert!(matches!(admission, Admission::Admitted { cycle: 1, .. }));
    }

    #[tokio::test]
    async fn test_entity_errors_keep_their_type() {
        let mut mock = MockClient::<ScreeningRoom>::new();
        mock.expect_action()
            .return_err(FrameworkError::EntityError(Box::new(RoomError::ShutForTheDay)));
        mock.expect_action()
            .return_err(FrameworkError::NotFound("room_1".to_string()));
        let room = ScreeningRoomClient::new(mock.client(), RoomId(1));

        assert_eq!(room.open().await, Err(RoomError::ShutForTheDay));
        assert_eq!(
            room.close().await,
            Err(RoomError::NotFound("room_1".to_string()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_reply_is_reported_not_panicked() {
        let mut mock = MockClient::<ScreeningRoom>::new();
        mock.expect_action().return_ok(RoomActionResult::Leave(true));
        let room = ScreeningRoomClient::new(mock.client(), RoomId(1));

        let result = room.clean().await;
        assert!(matches!(result, Err(RoomError::ActorCommunicationError(_))));
        mock.verify();
    }
}
