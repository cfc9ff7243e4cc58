//! # Generic Actor Server
//!
//! [`ResourceActor`] owns the entities of one type and applies requests to them
//! strictly one after another.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

/// The generic actor that manages a collection of entities.
///
/// This struct is the "server" half of the actor. It owns the store and the
/// receiving end of the mailbox. Because a single task drains the mailbox, every
/// request sees the entity exactly as the previous request left it, which is the
/// same guarantee a private mutex would give, without a lock to forget.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2. **Wire**: pass dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the run loop; it exits once every client clone is dropped.
///
/// ## Operations
///
/// * **Create**: allocates the next `u32` ID, builds the entity with
///   `from_create_params`, runs `on_create`, stores it.
/// * **Get** / **List** / **Count**: read-only views of the store.
/// * **Update**: runs `on_update` and returns the new state.
/// * **Delete**: runs `on_delete`, then removes the entity.
/// * **Action**: runs `handle_action` and returns its result.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mailbox capacity; senders wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// The `context` argument is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "ScreeningRoom" instead of "cinema_recipe::model::room::ScreeningRoom"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        debug!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    trace!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            debug!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    trace!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    trace!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        debug!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    trace!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        debug!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    trace!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => trace!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Count { respond_to } => {
                    trace!(entity_type, size = self.store.len(), "Count");
                    let _ = respond_to.send(Ok(self.store.len()));
                }
                ResourceRequest::List { respond_to } => {
                    trace!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
            }
        }

        debug!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Seat {
        id: u32,
        row: char,
        taken: bool,
    }

    #[derive(Debug)]
    struct SeatCreate {
        row: char,
    }

    #[derive(Debug)]
    struct SeatUpdate {
        row: Option<char>,
    }

    #[derive(Debug)]
    enum SeatAction {
        Take,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("seat already taken")]
    struct SeatTaken;

    #[async_trait]
    impl ActorEntity for Seat {
        type Id = u32;
        type Create = SeatCreate;
        type Update = SeatUpdate;
        type Action = SeatAction;
        type ActionResult = ();
        type Context = ();
        type Error = SeatTaken;

        fn from_create_params(id: u32, params: SeatCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                row: params.row,
                taken: false,
            })
        }

        async fn on_update(&mut self, update: SeatUpdate, _: &()) -> Result<(), Self::Error> {
            if let Some(row) = update.row {
                self.row = row;
            }
            Ok(())
        }

        async fn handle_action(&mut self, action: SeatAction, _: &()) -> Result<(), Self::Error> {
            match action {
                SeatAction::Take if self.taken => Err(SeatTaken),
                SeatAction::Take => {
                    self.taken = true;
                    Ok(())
                }
            }
        }
    }

    #[tokio::test]
    async fn test_resource_actor_lifecycle() {
        let (actor, client) = ResourceActor::<Seat>::new(8);
        let handle = tokio::spawn(actor.run(()));

        let a = client.create(SeatCreate { row: 'A' }).await.unwrap();
        let b = client.create(SeatCreate { row: 'B' }).await.unwrap();
        assert_eq!((a, b), (1, 2));
        assert_eq!(client.count().await.unwrap(), 2);

        client.perform_action(a, SeatAction::Take).await.unwrap();
        let err = client.perform_action(a, SeatAction::Take).await.unwrap_err();
        assert!(err.downcast_entity::<SeatTaken>().is_ok());

        let moved = client.update(b, SeatUpdate { row: Some('C') }).await.unwrap();
        assert_eq!(moved.row, 'C');

        client.delete(a).await.unwrap();
        assert!(client.get(a).await.unwrap().is_none());
        assert!(matches!(
            client.delete(a).await,
            Err(FrameworkError::NotFound(_))
        ));

        let remaining = client.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b);

        drop(client);
        handle.await.unwrap();
    }
}
