//! # Visitor Registry Actor
//!
//! Tracks everyone currently on the premises. Arriving is a framework `Create`,
//! leaving is a `Delete`, and the operator's "is anybody still here?" check is a
//! `Count`, all going through the registry's own mailbox.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Visitor`]
//! - [`error`] - [`RegistryError`]
//! - [`new()`] - Factory function that creates the actor and its generic client

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Visitor;

/// Creates a new visitor registry actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Visitor>, ResourceClient<Visitor>) {
    ResourceActor::new(buffer_size)
}
