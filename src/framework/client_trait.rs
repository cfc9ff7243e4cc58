//! # ActorClient Trait
//!
//! Common interface for resource-specific clients, adding default `get`, `delete`
//! and `count` methods on top of a generic `ResourceClient`.
use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// A domain client supplies its inner [`ResourceClient`] and a mapping from
/// [`FrameworkError`] into its own error type; the read/delete plumbing comes for free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::trace!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::trace!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Number of live entities.
    #[tracing::instrument(skip(self))]
    async fn count(&self) -> Result<usize, Self::Error> {
        tracing::trace!("Sending request");
        self.inner().count().await.map_err(Self::map_error)
    }
}
