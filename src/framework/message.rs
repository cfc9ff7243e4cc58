//! # Generic Messages
//!
//! The request envelope sent from a [`ResourceClient`](crate::framework::ResourceClient)
//! to its [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message type sent to the actor to request operations.
///
/// The variants are the CRUD lifecycle of a resource plus:
///
/// - **Action**: a resource-specific operation ([`ActorEntity::Action`]).
/// - **Count**: number of live entities, without cloning them.
/// - **List**: snapshot of every live entity, ordered by ID.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Count {
        respond_to: Response<usize>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}
