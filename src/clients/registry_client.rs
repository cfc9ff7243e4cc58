//! # Registry Client
//!
//! High-level API for the visitor registry.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{CustomerState, Visitor, VisitorCreate, VisitorId, VisitorUpdate};
use crate::registry::RegistryError;
use async_trait::async_trait;
use tracing::instrument;

#[derive(Clone)]
pub struct RegistryClient {
    inner: ResourceClient<Visitor>,
}

#[async_trait]
impl ActorClient<Visitor> for RegistryClient {
    type Error = RegistryError;

    fn inner(&self) -> &ResourceClient<Visitor> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<RegistryError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => RegistryError::NotFound(id),
            Err(other) => RegistryError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl RegistryClient {
    pub fn new(inner: ResourceClient<Visitor>) -> Self {
        Self { inner }
    }

    /// Registers an arrival and returns the ID the registry allocated for it.
    #[instrument(skip(self))]
    pub async fn enter(&self, name: &str) -> Result<VisitorId, RegistryError> {
        self.inner
            .create(VisitorCreate {
                name: name.to_string(),
            })
            .await
            .map_err(Self::map_error)
    }

    /// Removes a visitor from the premises.
    pub async fn exit(&self, visitor: VisitorId) -> Result<(), RegistryError> {
        self.delete(visitor).await
    }

    #[instrument(skip(self))]
    pub async fn record_state(
        &self,
        visitor: VisitorId,
        state: CustomerState,
    ) -> Result<Visitor, RegistryError> {
        self.inner
            .update(visitor, VisitorUpdate { state })
            .await
            .map_err(Self::map_error)
    }

    /// Visitors currently on the premises.
    pub async fn headcount(&self) -> Result<usize, RegistryError> {
        self.count().await
    }

    pub async fn is_empty(&self) -> Result<bool, RegistryError> {
        Ok(self.headcount().await? == 0)
    }

    /// Everyone on the premises, ordered by ID.
    #[instrument(skip(self))]
    pub async fn members(&self) -> Result<Vec<Visitor>, RegistryError> {
        self.inner.list().await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_create, expect_delete, MockClient};

    #[tokio::test]
    async fn test_enter_returns_allocated_id() {
        let (client, mut receiver) = create_mock_client::<Visitor>(10);
        let registry = RegistryClient::new(client);

        let arriving = tokio::spawn(async move { registry.enter("Ada").await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.name, "Ada");
        responder.send(Ok(VisitorId(7))).unwrap();

        assert_eq!(arriving.await.unwrap(), Ok(VisitorId(7)));
    }

    #[tokio::test]
    async fn test_exit_deletes_the_visitor() {
        let (client, mut receiver) = create_mock_client::<Visitor>(10);
        let registry = RegistryClient::new(client);

        let leaving = tokio::spawn(async move { registry.exit(VisitorId(7)).await });

        let (id, responder) = expect_delete(&mut receiver)
            .await
            .expect("Expected Delete request");
        assert_eq!(id, VisitorId(7));
        responder.send(Ok(())).unwrap();

        assert_eq!(leaving.await.unwrap(), Ok(()));
    }

    #[tokio::test]
    async fn test_is_empty_uses_the_headcount() {
        let mut mock = MockClient::<Visitor>::new();
        mock.expect_count().return_ok(0);
        mock.expect_count().return_ok(3);
        mock.expect_count().return_err(FrameworkError::ActorClosed);
        let registry = RegistryClient::new(mock.client());

        assert_eq!(registry.is_empty().await, Ok(true));
        assert_eq!(registry.is_empty().await, Ok(false));
        assert!(matches!(
            registry.is_empty().await,
            Err(RegistryError::ActorCommunicationError(_))
        ));
        mock.verify();
    }
}
