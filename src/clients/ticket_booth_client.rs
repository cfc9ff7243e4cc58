//! # Ticket Booth Client
//!
//! High-level API for the [`TicketBooth`] actor.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{BoothId, TicketBooth, TicketBoothCreate};
use crate::ticket_booth::{BoothAction, TicketBoothError, TicketOutcome};
use async_trait::async_trait;
use tracing::{instrument, trace};

/// Client bound to the cinema's one ticket booth.
#[derive(Clone)]
pub struct TicketBoothClient {
    inner: ResourceClient<TicketBooth>,
    booth: BoothId,
}

#[async_trait]
impl ActorClient<TicketBooth> for TicketBoothClient {
    type Error = TicketBoothError;

    fn inner(&self) -> &ResourceClient<TicketBooth> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<TicketBoothError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => TicketBoothError::NotFound(id),
            Err(other) => TicketBoothError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl TicketBoothClient {
    pub fn new(inner: ResourceClient<TicketBooth>, booth: BoothId) -> Self {
        Self { inner, booth }
    }

    /// Creates the booth inside a running actor and binds a client to it.
    #[instrument(skip(inner))]
    pub async fn install(
        inner: ResourceClient<TicketBooth>,
        capacity: u32,
    ) -> Result<Self, TicketBoothError> {
        let booth = inner
            .create(TicketBoothCreate { capacity })
            .await
            .map_err(Self::map_error)?;
        Ok(Self::new(inner, booth))
    }

    /// Attempts to buy one ticket.
    #[instrument(skip(self))]
    pub async fn try_issue(&self) -> Result<TicketOutcome, TicketBoothError> {
        trace!("Sending request");
        self.inner
            .perform_action(self.booth, BoothAction::TryIssue)
            .await
            .map_err(Self::map_error)
    }

    /// Tickets left, without buying one.
    #[instrument(skip(self))]
    pub async fn remaining(&self) -> Result<u32, TicketBoothError> {
        self.get(self.booth)
            .await?
            .map(|booth| booth.remaining)
            .ok_or_else(|| TicketBoothError::NotFound(self.booth.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, MockClient};

    #[tokio::test]
    async fn test_try_issue_sends_action_to_bound_booth() {
        let (client, mut receiver) = create_mock_client::<TicketBooth>(10);
        let booth = TicketBoothClient::new(client, BoothId(4));

        let sale = tokio::spawn(async move { booth.try_issue().await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, BoothId(4));
        assert!(matches!(action, BoothAction::TryIssue));
        responder
            .send(Ok(TicketOutcome::Issued { remaining: 2 }))
            .unwrap();

        assert_eq!(
            sale.await.unwrap().unwrap(),
            TicketOutcome::Issued { remaining: 2 }
        );
    }

    #[tokio::test]
    async fn test_closed_actor_maps_to_communication_error() {
        let mut mock = MockClient::<TicketBooth>::new();
        mock.expect_action().return_err(FrameworkError::ActorClosed);
        let booth = TicketBoothClient::new(mock.client(), BoothId(1));

        let result = booth.try_issue().await;
        assert!(matches!(
            result,
            Err(TicketBoothError::ActorCommunicationError(_))
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_remaining_reads_the_booth() {
        let mut mock = MockClient::<TicketBooth>::new();
        let mut stock = TicketBooth::new(BoothId(1), 6);
        stock.remaining = 3;
        mock.expect_get().return_ok(Some(stock));
        mock.expect_get().return_ok(None);
        let booth = TicketBoothClient::new(mock.client(), BoothId(1));

        assert_eq!(booth.remaining().await.unwrap(), 3);
        assert_eq!(
            booth.remaining().await,
            Err(TicketBoothError::NotFound("booth_1".to_string()))
        );
        mock.verify();
    }
}
